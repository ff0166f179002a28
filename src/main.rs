use std::sync::Arc;
use std::time::Duration;

use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use rdo_presence_bot::constants::REAPER_INTERVAL_SECS;
use rdo_presence_bot::database::players::ProfileStore;
use rdo_presence_bot::database::{init, PgProfileStore};
use rdo_presence_bot::interactions::Router;
use rdo_presence_bot::roles::RoleConfig;
use rdo_presence_bot::settings::Env;
use rdo_presence_bot::telemetry::Telemetry;
use rdo_presence_bot::{handler, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let env = Env::read()?;
    tracing::info!(environment = env.environment, "starting bot");

    let telemetry = Telemetry::new(
        env.telemetry_project_id,
        env.telemetry_project_key.clone(),
        env.environment,
    );

    let pool = init::connect(&env.database_url).await?;
    init::ensure_schema(&pool).await?;
    let store: Arc<dyn ProfileStore> = Arc::new(PgProfileStore::new(pool));

    // The only deletion path for profiles: the one-second expiry sweep.
    init::spawn_expiry_reaper(store.clone(), Duration::from_secs(REAPER_INTERVAL_SECS));

    let app_state = Arc::new(AppState {
        store,
        channels: RwLock::new(Default::default()),
        command_ids: RwLock::new(Default::default()),
        guild_id: env.guild_id,
        bot_role: env.bot_role.clone(),
        changelog_url: env.changelog_url.clone(),
        roles: RoleConfig::standard(),
        guild_roles: RwLock::new(Default::default()),
        role_message_id: RwLock::new(None),
        telemetry,
    });

    // Reactions and interactions arrive with non-privileged intents;
    // GUILD_MEMBERS is needed for the welcome-on-join greeting.
    let intents = GatewayIntents::non_privileged() | GatewayIntents::GUILD_MEMBERS;

    let mut client = Client::builder(&env.bot_token, intents)
        .event_handler(handler::Handler::new(Router::standard()))
        .await?;

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    client.start().await?;
    Ok(())
}
