//! Role self-assignment via reactions on a pinned embed, plus the welcome
//! message for new members.
//!
//! The role -> emoji mapping is injected configuration owned by `AppState`,
//! not process-wide mutable state; guild role ids are captured once at ready.

use std::sync::Arc;

use serenity::model::channel::{Reaction, ReactionType};
use serenity::model::guild::Member;
use serenity::prelude::Context;

use crate::AppState;

/// One self-assignable role: guild role name, reaction emoji and the label
/// shown in the assignment message.
#[derive(Debug, Clone)]
pub struct RoleEntry {
    pub role_name: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
}

/// Immutable role/emoji configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct RoleConfig {
    entries: Vec<RoleEntry>,
}

impl RoleConfig {
    /// The community's standard role set. Emojis are plain unicode because
    /// free servers have no custom emoji slots to spare.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                RoleEntry { role_name: "Bountyhunter", emoji: "⛓", label: "Bountyhunter" },
                RoleEntry { role_name: "Trader", emoji: "🤝", label: "Trader" },
                RoleEntry { role_name: "Collector", emoji: "🔮", label: "Collector" },
                RoleEntry { role_name: "Moonshiner", emoji: "🥃", label: "Moonshiner" },
                RoleEntry { role_name: "Naturalist", emoji: "🌿", label: "Naturalist" },
                RoleEntry { role_name: "PC", emoji: "💻", label: "PC" },
                RoleEntry { role_name: "PS4", emoji: "🅿", label: "Playstation" },
                RoleEntry { role_name: "XBOX", emoji: "❎", label: "Xbox" },
            ],
        }
    }

    pub fn entries(&self) -> &[RoleEntry] {
        &self.entries
    }

    pub fn role_for_emoji(&self, emoji: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.emoji == emoji)
            .map(|e| e.role_name)
    }

    /// Body of the self-assignment embed, one line per role.
    pub fn self_assign_description(&self) -> String {
        let mut description = String::from("React to this message to assign your roles:");
        for entry in &self.entries {
            description.push_str(&format!("\n\n{} {}", entry.emoji, entry.label));
        }
        description
    }
}

/// A reaction landed on some message; grants the matching role when it is
/// the self-assignment message and a configured emoji.
pub async fn reaction_added(ctx: Context, state: Arc<AppState>, reaction: Reaction) {
    let Some((user_id, role_name)) = match_self_assign(&ctx, &state, &reaction).await else {
        return;
    };
    let role_id = state.guild_roles.read().await.get(role_name).copied();
    if let Some(role_id) = role_id {
        if let Err(e) = ctx
            .http
            .add_member_role(state.guild_id, user_id, role_id, Some("role self-assignment"))
            .await
        {
            state.telemetry.notify("roles.assign", &e);
        } else {
            tracing::info!(target: "roles", user = user_id.get(), role = role_name, "role assigned");
        }
    }
}

/// The inverse: removing the reaction revokes the role.
pub async fn reaction_removed(ctx: Context, state: Arc<AppState>, reaction: Reaction) {
    let Some((user_id, role_name)) = match_self_assign(&ctx, &state, &reaction).await else {
        return;
    };
    let role_id = state.guild_roles.read().await.get(role_name).copied();
    if let Some(role_id) = role_id {
        if let Err(e) = ctx
            .http
            .remove_member_role(state.guild_id, user_id, role_id, Some("role self-assignment"))
            .await
        {
            state.telemetry.notify("roles.unassign", &e);
        } else {
            tracing::info!(target: "roles", user = user_id.get(), role = role_name, "role removed");
        }
    }
}

/// Greets members who arrive with no roles yet, pointing them at the roles
/// and commands channels.
pub async fn welcome_member(ctx: Context, state: Arc<AppState>, member: Member) {
    if member.guild_id != state.guild_id || !member.roles.is_empty() {
        return;
    }
    let channels = state.channels.read().await.clone();
    let (Some(general), Some(roles), Some(commands)) =
        (channels.general, channels.roles, channels.commands)
    else {
        tracing::warn!(target: "roles.welcome", "welcome channels not resolved, skipping greeting");
        return;
    };
    let greeting = format!(
        "Howdy <@{}>, welcome to the server!\nTo get you started please select your roles \
         in <#{roles}> and have a look inside <#{commands}>.",
        member.user.id
    );
    if let Err(e) = general.say(&ctx.http, greeting).await {
        state.telemetry.notify("roles.welcome", &e);
    }
}

/// Checks a reaction against the self-assignment message and the configured
/// emoji set; filters the bot's own seed reactions.
async fn match_self_assign(
    ctx: &Context,
    state: &AppState,
    reaction: &Reaction,
) -> Option<(serenity::model::id::UserId, &'static str)> {
    let message_id = (*state.role_message_id.read().await)?;
    if reaction.message_id != message_id {
        return None;
    }
    let user_id = reaction.user_id?;
    if user_id == ctx.cache.current_user().id {
        return None;
    }
    let ReactionType::Unicode(emoji) = &reaction.emoji else {
        return None;
    };
    let role_name = state.roles.role_for_emoji(emoji)?;
    Some((user_id, role_name))
}
