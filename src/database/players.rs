//! The player profile model and the store contract.
//!
//! Exactly one record exists per Discord identity, created only by an
//! explicit `/setup` submission. Every successful mutation pushes the
//! record's expiry a full year out; the background reaper deletes whatever
//! goes untouched past that deadline.
//!
//! The merge/transition rules live here as pure helpers so the Postgres
//! store and the in-memory store cannot drift apart semantically.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::constants::PROFILE_TTL_DAYS;
use crate::platform::Platform;

/// One member's profile record.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Profile {
    /// Stable external identity; immutable unique key.
    pub discord_id: String,
    /// Display name captured at setup time (nickname if set, else username).
    pub name: String,
    /// 9-digit Rockstar Social Club id used to build the avatar URL.
    /// Empty means "unknown avatar".
    pub rockstar_id: String,
    /// Opaque bounty text, 1-5 chars. Deliberately not validated as a number.
    pub bounty: String,
    /// One of the named camp locations, or empty.
    pub camp: String,
    /// Free-text footer shown on presence broadcasts, <= 42 chars.
    pub footer: String,
    pub online: bool,
    /// Platform tag, set on the online transition. Not cleared when going
    /// offline; only read while `online` is true.
    pub platform: String,
    /// Timestamp of the most recent online/offline toggle.
    pub last_transition_at: DateTime<Utc>,
    /// TTL deadline; the record is reaped once this elapses.
    pub expires_at: DateTime<Utc>,
}

/// Fields supplied by an edit operation. `None` means "not supplied, keep
/// the stored value" — an empty modal input never erases anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub rockstar_id: Option<String>,
    pub bounty: Option<String>,
    pub camp: Option<String>,
    pub footer: Option<String>,
}

impl ProfilePatch {
    pub fn rockstar_id(mut self, value: impl Into<String>) -> Self {
        self.rockstar_id = Some(value.into());
        self
    }

    pub fn bounty(mut self, value: impl Into<String>) -> Self {
        self.bounty = Some(value.into());
        self
    }

    pub fn camp(mut self, value: impl Into<String>) -> Self {
        self.camp = Some(value.into());
        self
    }

    pub fn footer(mut self, value: impl Into<String>) -> Self {
        self.footer = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rockstar_id.is_none()
            && self.bounty.is_none()
            && self.camp.is_none()
            && self.footer.is_none()
    }
}

/// Trims a modal input and treats the empty result as "not supplied".
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The retention window added to `now` on every mutation.
pub fn retention_window() -> Duration {
    Duration::days(PROFILE_TTL_DAYS)
}

/// A fresh record as created by the first setup submission.
pub fn new_profile(
    discord_id: &str,
    name: &str,
    patch: &ProfilePatch,
    now: DateTime<Utc>,
) -> Profile {
    let mut profile = Profile {
        discord_id: discord_id.to_string(),
        name: name.to_string(),
        rockstar_id: String::new(),
        bounty: String::new(),
        camp: String::new(),
        footer: String::new(),
        online: false,
        platform: String::new(),
        last_transition_at: now,
        expires_at: now + retention_window(),
    };
    apply_patch(&mut profile, patch, now);
    profile
}

/// Merges the supplied fields into an existing record and refreshes expiry.
/// Unsupplied fields are left untouched.
pub fn apply_patch(profile: &mut Profile, patch: &ProfilePatch, now: DateTime<Utc>) {
    if let Some(rid) = &patch.rockstar_id {
        profile.rockstar_id = rid.clone();
    }
    if let Some(bounty) = &patch.bounty {
        profile.bounty = bounty.clone();
    }
    if let Some(camp) = &patch.camp {
        profile.camp = camp.clone();
    }
    if let Some(footer) = &patch.footer {
        profile.footer = footer.clone();
    }
    profile.expires_at = now + retention_window();
}

/// The online transition. Re-entrant: going online while already online just
/// overwrites platform and timestamps.
pub fn mark_online(profile: &mut Profile, platform: Platform, now: DateTime<Utc>) {
    profile.online = true;
    profile.platform = platform.tag().to_string();
    profile.last_transition_at = now;
    profile.expires_at = now + retention_window();
}

/// The offline transition. Idempotent, and deliberately leaves the stale
/// platform tag in place — nothing reads it while `online` is false.
pub fn mark_offline(profile: &mut Profile, now: DateTime<Utc>) {
    profile.online = false;
    profile.last_transition_at = now;
    profile.expires_at = now + retention_window();
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The identity has no record. Expected branch: the member is told to
    /// run `/setup` first.
    #[error("profile is not set up")]
    NotSetUp,
    /// The persistence collaborator failed; reported to telemetry by the
    /// caller, never retried.
    #[error("profile store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Persistence contract for player profiles. Every write is a single-record
/// atomic merge; no application-level locking exists or is needed.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, discord_id: &str) -> Result<Option<Profile>, StoreError>;

    /// Insert-or-merge driven by a setup submission. Returns the stored
    /// record and whether it was freshly created.
    async fn upsert_on_setup(
        &self,
        discord_id: &str,
        name: &str,
        patch: ProfilePatch,
    ) -> Result<(Profile, bool), StoreError>;

    /// Merge supplied fields into an existing record; `NotSetUp` when the
    /// identity has never completed setup.
    async fn merge_fields(
        &self,
        discord_id: &str,
        patch: ProfilePatch,
    ) -> Result<Profile, StoreError>;

    async fn set_online(
        &self,
        discord_id: &str,
        platform: Platform,
    ) -> Result<Profile, StoreError>;

    async fn set_offline(&self, discord_id: &str) -> Result<Profile, StoreError>;

    /// All currently-online profiles on a platform, oldest session first.
    async fn list_online(&self, platform: Platform) -> Result<Vec<Profile>, StoreError>;

    /// Deletes every record whose expiry has elapsed; returns the count.
    async fn reap_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError>;
}
