//! In-memory profile store.
//!
//! Used for local development without a Postgres instance and by the
//! integration tests. Shares the pure merge/transition helpers with the
//! Postgres store so the two cannot diverge on semantics.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use super::players::{
    apply_patch, mark_offline, mark_online, new_profile, Profile, ProfilePatch, ProfileStore,
    StoreError,
};
use crate::platform::Platform;

#[derive(Default)]
pub struct MemoryProfileStore {
    records: Mutex<HashMap<String, Profile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get(&self, discord_id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self.records.lock().await.get(discord_id).cloned())
    }

    async fn upsert_on_setup(
        &self,
        discord_id: &str,
        name: &str,
        patch: ProfilePatch,
    ) -> Result<(Profile, bool), StoreError> {
        let now = Utc::now();
        let mut records = self.records.lock().await;
        match records.get_mut(discord_id) {
            Some(profile) => {
                profile.name = name.to_string();
                apply_patch(profile, &patch, now);
                Ok((profile.clone(), false))
            }
            None => {
                let profile = new_profile(discord_id, name, &patch, now);
                records.insert(discord_id.to_string(), profile.clone());
                Ok((profile, true))
            }
        }
    }

    async fn merge_fields(
        &self,
        discord_id: &str,
        patch: ProfilePatch,
    ) -> Result<Profile, StoreError> {
        let mut records = self.records.lock().await;
        let profile = records.get_mut(discord_id).ok_or(StoreError::NotSetUp)?;
        apply_patch(profile, &patch, Utc::now());
        Ok(profile.clone())
    }

    async fn set_online(
        &self,
        discord_id: &str,
        platform: Platform,
    ) -> Result<Profile, StoreError> {
        let mut records = self.records.lock().await;
        let profile = records.get_mut(discord_id).ok_or(StoreError::NotSetUp)?;
        mark_online(profile, platform, Utc::now());
        Ok(profile.clone())
    }

    async fn set_offline(&self, discord_id: &str) -> Result<Profile, StoreError> {
        let mut records = self.records.lock().await;
        let profile = records.get_mut(discord_id).ok_or(StoreError::NotSetUp)?;
        mark_offline(profile, Utc::now());
        Ok(profile.clone())
    }

    async fn list_online(&self, platform: Platform) -> Result<Vec<Profile>, StoreError> {
        let records = self.records.lock().await;
        let mut online: Vec<Profile> = records
            .values()
            .filter(|p| p.online && p.platform == platform.tag())
            .cloned()
            .collect();
        online.sort_by_key(|p| p.last_transition_at);
        Ok(online)
    }

    async fn reap_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError> {
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|_, p| p.expires_at > now);
        Ok((before - records.len()) as u64)
    }
}
