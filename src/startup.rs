//! Guild preparation at ready: channel discovery, command registration,
//! the command instructions message, the role self-assignment message and
//! the changelog refresh.
//!
//! Each step degrades independently — a failure is logged and reported, the
//! remaining steps still run.

use std::sync::Arc;

use serenity::builder::{CreateEmbed, CreateMessage, EditMessage, GetMessages};
use serenity::model::channel::ReactionType;
use serenity::prelude::Context;

use crate::model::CommandIds;
use crate::platform::GuildChannels;
use crate::ui::style::COLOR_WHITE;
use crate::{changelog, commands, AppState};

pub async fn prepare(ctx: &Context, state: &Arc<AppState>) {
    if let Err(e) = discover_channels(ctx, state).await {
        state.telemetry.notify("startup.channels", &e);
    }
    if let Err(e) = capture_roles(ctx, state).await {
        state.telemetry.notify("startup.roles", &e);
    }
    if let Err(e) = register_commands(ctx, state).await {
        state.telemetry.notify("startup.commands", &e);
    }
    if let Err(e) = ensure_role_message(ctx, state).await {
        state.telemetry.notify("startup.role_message", &e);
    }
    if let Err(e) = ensure_command_instructions(ctx, state).await {
        state.telemetry.notify("startup.instructions", &e);
    }
    if let Err(e) = changelog::refresh(ctx, state).await {
        state.telemetry.notify("startup.changelog", &e);
    }
    tracing::info!(target: "startup", "initial setup complete, bot is ready and waiting");
}

async fn discover_channels(ctx: &Context, state: &AppState) -> anyhow::Result<()> {
    tracing::info!(target: "startup", "reading channels");
    let channels = state.guild_id.channels(&ctx.http).await?;
    let mapped = GuildChannels::from_names(channels.into_iter().map(|(id, ch)| (ch.name, id)));
    *state.channels.write().await = mapped;
    Ok(())
}

/// Captures guild role ids by name, skipping `@everyone` and the bot's own
/// application role.
async fn capture_roles(ctx: &Context, state: &AppState) -> anyhow::Result<()> {
    tracing::info!(target: "startup", "reading server roles");
    let roles = state.guild_id.roles(&ctx.http).await?;
    let mut by_name = std::collections::HashMap::new();
    for (id, role) in roles {
        if role.name == "@everyone" || role.name == state.bot_role {
            continue;
        }
        by_name.insert(role.name.clone(), id);
    }
    *state.guild_roles.write().await = by_name;
    Ok(())
}

/// Bulk-overwrites the guild's slash commands and captures their ids for
/// clickable mentions.
async fn register_commands(ctx: &Context, state: &AppState) -> anyhow::Result<()> {
    tracing::info!(target: "startup", "updating server commands");
    let registered = state.guild_id.set_commands(&ctx.http, commands::all()).await?;
    let mut ids = CommandIds::default();
    for command in registered {
        match command.name.as_str() {
            "setup" => ids.setup = Some(command.id),
            "me" => ids.me = Some(command.id),
            "online" => ids.online = Some(command.id),
            "offline" => ids.offline = Some(command.id),
            "show" => ids.show = Some(command.id),
            _ => {}
        }
    }
    *state.command_ids.write().await = ids;
    Ok(())
}

/// Ensures the role self-assignment embed exists in `#roles` and matches the
/// configured description; seeds one reaction per configured role.
async fn ensure_role_message(ctx: &Context, state: &AppState) -> anyhow::Result<()> {
    let channels = state.channels.read().await.clone();
    let Some(roles_channel) = channels.roles else {
        tracing::warn!(target: "startup", "roles channel not resolved, skipping role message");
        return Ok(());
    };

    let description = state.roles.self_assign_description();
    let embed = CreateEmbed::new()
        .title("Server Roles")
        .description(&description)
        .color(COLOR_WHITE);

    tracing::info!(target: "startup", "reading roles channel messages");
    let existing = roles_channel
        .messages(&ctx.http, GetMessages::new().limit(10))
        .await?;

    let message_id = match existing.first() {
        None => {
            tracing::info!(target: "startup", "writing role self-assignment message");
            let message = roles_channel
                .send_message(&ctx.http, CreateMessage::new().embed(embed))
                .await?;
            for entry in state.roles.entries() {
                message
                    .react(&ctx.http, ReactionType::Unicode(entry.emoji.to_string()))
                    .await?;
            }
            message.id
        }
        Some(message)
            if message
                .embeds
                .first()
                .and_then(|e| e.description.as_deref())
                != Some(description.as_str()) =>
        {
            tracing::info!(target: "startup", "updating role self-assignment message");
            roles_channel
                .edit_message(&ctx.http, message.id, EditMessage::new().embed(embed))
                .await?;
            message.id
        }
        Some(message) => message.id,
    };
    *state.role_message_id.write().await = Some(message_id);
    Ok(())
}

/// Ensures the command usage guide in `#commands` is present and current.
async fn ensure_command_instructions(ctx: &Context, state: &AppState) -> anyhow::Result<()> {
    let channels = state.channels.read().await.clone();
    let Some(commands_channel) = channels.commands else {
        tracing::warn!(target: "startup", "commands channel not resolved, skipping instructions");
        return Ok(());
    };

    let ids = *state.command_ids.read().await;
    let content = instructions_text(&ids);

    tracing::info!(target: "startup", "reading commands channel messages");
    let existing = commands_channel
        .messages(&ctx.http, GetMessages::new().limit(10))
        .await?;

    match existing.first() {
        None => {
            tracing::info!(target: "startup", "adding command instructions");
            commands_channel.say(&ctx.http, content).await?;
        }
        Some(message) if message.content != content => {
            tracing::info!(target: "startup", "updating command instructions");
            commands_channel
                .edit_message(&ctx.http, message.id, EditMessage::new().content(content))
                .await?;
        }
        Some(_) => {}
    }
    Ok(())
}

fn instructions_text(ids: &CommandIds) -> String {
    format!(
        "{setup} : Set up your RDO profile for the server. Here you can set your R* ID for \
         the Avatar, your camp location, bounty and a message that displays in the footer \
         region in your online notification.\nTo find your R* ID, visit your Social Club \
         profile here: <https://socialclub.rockstargames.com/games/rdr2/overview>.\nOn the \
         tiny avatar of your character do a right-click and click on *Open image in new \
         tab*. In the browser address bar you will notice a 9-digit number (just before \
         */pedshot_0.jpg*). This is your R* ID which you can enter during setup to have \
         your avatar displayed in online notifications.\n`/setup` is a convenient way to \
         provide all info at once.\n\n{me} : This command displays your current profile \
         information along with buttons for editing. It is a quick way to check and update \
         your info.\n\n{online} : Flag yourself as online to let others know you are \
         ingame.\nThe bot will respond with a message providing you with a couple of \
         buttons for quickly editing your information during your gameplay.\nUse it in the \
         channel of your platform (or lobby).\n\n{offline} : Flag yourself as offline to \
         let others know you are not ingame anymore.\nUse it in the same channel where you \
         flagged yourself as online.\n\n{show} : Show players that are online with their \
         current data.",
        setup = ids.mention("setup"),
        me = ids.mention("me"),
        online = ids.mention("online"),
        offline = ids.mention("offline"),
        show = ids.mention("show"),
    )
}
