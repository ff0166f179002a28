//! Connection pool setup, schema bootstrap and the expiry reaper.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

use super::players::ProfileStore;

/// A type alias for the database connection pool (`Pool<Postgres>`).
pub type DbPool = Pool<Postgres>;

pub async fn connect(database_url: &str) -> sqlx::Result<DbPool> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Creates the `players` table and its supporting indexes if missing.
/// Idempotent; runs on every startup.
pub async fn ensure_schema(pool: &DbPool) -> sqlx::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS players ( \
             discord_id TEXT PRIMARY KEY, \
             name TEXT NOT NULL, \
             rockstar_id TEXT NOT NULL DEFAULT '', \
             bounty TEXT NOT NULL DEFAULT '', \
             camp TEXT NOT NULL DEFAULT '', \
             footer TEXT NOT NULL DEFAULT '', \
             online BOOLEAN NOT NULL DEFAULT FALSE, \
             platform TEXT NOT NULL DEFAULT '', \
             last_transition_at TIMESTAMPTZ NOT NULL, \
             expires_at TIMESTAMPTZ NOT NULL \
         )",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS players_online_idx \
         ON players (platform, last_transition_at) WHERE online",
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS players_expires_idx ON players (expires_at)")
        .execute(pool)
        .await?;
    Ok(())
}

/// Spawns the background sweep that deletes profiles whose retention window
/// elapsed without a mutation. This is the only deletion path in the system.
pub fn spawn_expiry_reaper(
    store: Arc<dyn ProfileStore>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match store.reap_expired(chrono::Utc::now()).await {
                Ok(0) => {}
                Ok(deleted) => {
                    tracing::info!(target: "store.reap", deleted, "expired profiles removed");
                }
                Err(e) => {
                    tracing::warn!(target: "store.reap", error = %e, "expiry sweep failed");
                }
            }
        }
    })
}
