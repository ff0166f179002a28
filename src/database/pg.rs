//! Postgres-backed profile store.
//!
//! Each operation is a single-row statement (`INSERT .. ON CONFLICT` or
//! `UPDATE .. RETURNING`), so concurrent mutations of the same identity are
//! serialized by the database's per-row atomicity rather than in-process
//! locking. Queries are runtime-checked so the crate builds without a live
//! database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::players::{retention_window, Profile, ProfilePatch, ProfileStore, StoreError};
use crate::platform::Platform;

const PROFILE_COLUMNS: &str = "discord_id, name, rockstar_id, bounty, camp, footer, \
     online, platform, last_transition_at, expires_at";

#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get(&self, discord_id: &str) -> Result<Option<Profile>, StoreError> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM players WHERE discord_id = $1"
        ))
        .bind(discord_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn upsert_on_setup(
        &self,
        discord_id: &str,
        name: &str,
        patch: ProfilePatch,
    ) -> Result<(Profile, bool), StoreError> {
        let now = Utc::now();
        let expires = now + retention_window();
        // First setup inserts; ON CONFLICT DO NOTHING covers the race where
        // two setup submissions for the same member land together, in which
        // case the loser falls through to the merge path below.
        let inserted = sqlx::query_as::<_, Profile>(&format!(
            "INSERT INTO players \
                 (discord_id, name, rockstar_id, bounty, camp, footer, \
                  online, platform, last_transition_at, expires_at) \
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), '', \
                     COALESCE($5, ''), FALSE, '', $6, $7) \
             ON CONFLICT (discord_id) DO NOTHING \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(discord_id)
        .bind(name)
        .bind(&patch.rockstar_id)
        .bind(&patch.bounty)
        .bind(&patch.footer)
        .bind(now)
        .bind(expires)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(profile) = inserted {
            return Ok((profile, true));
        }

        // Repeat setup: merge the supplied fields and refresh the display
        // name; empty inputs keep the stored values.
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "UPDATE players SET \
                 name = $2, \
                 rockstar_id = COALESCE($3, rockstar_id), \
                 bounty = COALESCE($4, bounty), \
                 footer = COALESCE($5, footer), \
                 expires_at = $6 \
             WHERE discord_id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(discord_id)
        .bind(name)
        .bind(&patch.rockstar_id)
        .bind(&patch.bounty)
        .bind(&patch.footer)
        .bind(expires)
        .fetch_one(&self.pool)
        .await?;
        Ok((profile, false))
    }

    async fn merge_fields(
        &self,
        discord_id: &str,
        patch: ProfilePatch,
    ) -> Result<Profile, StoreError> {
        let expires = Utc::now() + retention_window();
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "UPDATE players SET \
                 rockstar_id = COALESCE($2, rockstar_id), \
                 bounty = COALESCE($3, bounty), \
                 camp = COALESCE($4, camp), \
                 footer = COALESCE($5, footer), \
                 expires_at = $6 \
             WHERE discord_id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(discord_id)
        .bind(&patch.rockstar_id)
        .bind(&patch.bounty)
        .bind(&patch.camp)
        .bind(&patch.footer)
        .bind(expires)
        .fetch_optional(&self.pool)
        .await?;
        profile.ok_or(StoreError::NotSetUp)
    }

    async fn set_online(
        &self,
        discord_id: &str,
        platform: Platform,
    ) -> Result<Profile, StoreError> {
        let now = Utc::now();
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "UPDATE players SET \
                 online = TRUE, \
                 platform = $2, \
                 last_transition_at = $3, \
                 expires_at = $4 \
             WHERE discord_id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(discord_id)
        .bind(platform.tag())
        .bind(now)
        .bind(now + retention_window())
        .fetch_optional(&self.pool)
        .await?;
        profile.ok_or(StoreError::NotSetUp)
    }

    async fn set_offline(&self, discord_id: &str) -> Result<Profile, StoreError> {
        let now = Utc::now();
        // `platform` is intentionally untouched; the stale tag is harmless
        // while `online` is false.
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "UPDATE players SET \
                 online = FALSE, \
                 last_transition_at = $2, \
                 expires_at = $3 \
             WHERE discord_id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(discord_id)
        .bind(now)
        .bind(now + retention_window())
        .fetch_optional(&self.pool)
        .await?;
        profile.ok_or(StoreError::NotSetUp)
    }

    async fn list_online(&self, platform: Platform) -> Result<Vec<Profile>, StoreError> {
        let profiles = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM players \
             WHERE online AND platform = $1 \
             ORDER BY last_transition_at ASC"
        ))
        .bind(platform.tag())
        .fetch_all(&self.pool)
        .await?;
        Ok(profiles)
    }

    async fn reap_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM players WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
