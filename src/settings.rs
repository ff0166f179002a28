//! Environment configuration, read once at startup.
//!
//! Presence of a `.env` file switches the bot into development mode: the
//! file is loaded and `DEV_GUILD_ID` is used instead of `GUILD_ID`.

use std::path::Path;

use anyhow::Context as _;
use serenity::model::id::GuildId;

#[derive(Debug, Clone)]
pub struct Env {
    /// `DEVELOPMENT` or `PRODUCTION`; also tags telemetry notices.
    pub environment: &'static str,
    pub bot_token: String,
    /// Name of the bot's own guild role, excluded from self-assignment.
    pub bot_role: String,
    pub guild_id: GuildId,
    pub changelog_url: String,
    pub database_url: String,
    pub telemetry_project_id: Option<i64>,
    pub telemetry_project_key: Option<String>,
}

impl Env {
    pub fn read() -> anyhow::Result<Self> {
        let development = Path::new(".env").exists();
        if development {
            dotenv::dotenv().context("failed to load .env file")?;
        }
        let environment = if development {
            "DEVELOPMENT"
        } else {
            "PRODUCTION"
        };
        tracing::info!(target: "settings", environment, "reading environment variables");

        let guild_var = if development { "DEV_GUILD_ID" } else { "GUILD_ID" };
        let guild_id = var(guild_var)?
            .parse::<u64>()
            .with_context(|| format!("{guild_var} must be a numeric guild id"))?;

        Ok(Self {
            environment,
            bot_token: var("BOT_TOKEN")?,
            bot_role: var("BOT_ROLE")?,
            guild_id: GuildId::new(guild_id),
            changelog_url: var("CHANGELOG")?,
            database_url: var("DATABASE_URL")?,
            telemetry_project_id: std::env::var("TELEMETRY_PROJECT_ID")
                .ok()
                .and_then(|v| v.parse().ok()),
            telemetry_project_key: std::env::var("TELEMETRY_PROJECT_KEY").ok(),
        })
    }
}

fn var(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("missing environment variable {name}"))
}
