//! Shared application state stored in Serenity's global context.

use std::collections::HashMap;
use std::sync::Arc;

use serenity::model::id::{CommandId, GuildId, MessageId, RoleId};
use serenity::prelude::TypeMapKey;
use tokio::sync::RwLock;

use crate::database::players::ProfileStore;
use crate::platform::GuildChannels;
use crate::roles::RoleConfig;
use crate::telemetry::Telemetry;

/// Registered slash-command ids, captured at ready so guidance texts can use
/// clickable `</command:id>` mentions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandIds {
    pub setup: Option<CommandId>,
    pub me: Option<CommandId>,
    pub online: Option<CommandId>,
    pub offline: Option<CommandId>,
    pub show: Option<CommandId>,
}

impl CommandIds {
    pub fn mention_setup(&self) -> String {
        mention("setup", self.setup)
    }

    pub fn mention(&self, name: &str) -> String {
        let id = match name {
            "setup" => self.setup,
            "me" => self.me,
            "online" => self.online,
            "offline" => self.offline,
            "show" => self.show,
            _ => None,
        };
        mention(name, id)
    }
}

fn mention(name: &str, id: Option<CommandId>) -> String {
    match id {
        Some(id) => format!("</{name}:{id}>"),
        None => format!("`/{name}`"),
    }
}

/// The central, shared state of the application. An `Arc<AppState>` lives in
/// the global context for access from every command and event handler.
pub struct AppState {
    /// Profile persistence. Trait object so tests and DB-less development
    /// can swap in the in-memory store.
    pub store: Arc<dyn ProfileStore>,
    /// Channel name -> id mapping resolved at ready; also the
    /// channel -> platform resolver.
    pub channels: RwLock<GuildChannels>,
    pub command_ids: RwLock<CommandIds>,
    pub guild_id: GuildId,
    /// Name of the bot's own role, skipped during role self-assignment.
    pub bot_role: String,
    pub changelog_url: String,
    /// Immutable role -> emoji configuration for self-assignment.
    pub roles: RoleConfig,
    /// Guild role ids by name, captured at ready.
    pub guild_roles: RwLock<HashMap<String, RoleId>>,
    /// The self-assignment message reactions are matched against.
    pub role_message_id: RwLock<Option<MessageId>>,
    pub telemetry: Telemetry,
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }

    /// Clickable `/setup` mention for not-set-up guidance.
    pub async fn setup_mention(&self) -> String {
        self.command_ids.read().await.mention_setup()
    }
}
