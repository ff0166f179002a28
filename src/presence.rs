//! Presence lifecycle orchestration.
//!
//! Two states per profile, OFFLINE and ONLINE. Going online requires a
//! platform resolved from the channel and is re-entrant; going offline is
//! idempotent. Both transitions refresh the retention deadline, and every
//! successful transition ends in a rendered broadcast — never silence.

use crate::database::players::{Profile, StoreError};
use crate::platform::Platform;
use crate::AppState;

pub async fn transition_online(
    state: &AppState,
    identity: &str,
    platform: Platform,
) -> Result<Profile, StoreError> {
    let profile = state.store.set_online(identity, platform).await?;
    tracing::info!(
        target: "presence.online",
        identity,
        platform = platform.tag(),
        "member flagged online"
    );
    Ok(profile)
}

pub async fn transition_offline(state: &AppState, identity: &str) -> Result<Profile, StoreError> {
    let profile = state.store.set_offline(identity).await?;
    tracing::info!(target: "presence.offline", identity, "member flagged offline");
    Ok(profile)
}

/// Current online roster for a platform, oldest session first.
pub async fn online_roster(
    state: &AppState,
    platform: Platform,
) -> Result<Vec<Profile>, StoreError> {
    state.store.list_online(platform).await
}
