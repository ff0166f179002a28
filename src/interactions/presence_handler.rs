//! Handlers for the presence quick controls: Show Players and Go Offline.

use std::sync::Arc;

use chrono::Utc;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::ComponentInteraction;
use serenity::model::id::UserId;
use serenity::prelude::Context;

use crate::database::players::StoreError;
use crate::presence;
use crate::ui::roster::{offline_broadcast, roster_embeds};
use crate::ui::style::not_set_up_message;
use crate::AppState;

/// The Show Players button: same behaviour as `/show`, scoped by the channel
/// the button lives in.
pub async fn show_players(
    ctx: Context,
    component: ComponentInteraction,
    state: Arc<AppState>,
    user: UserId,
) {
    tracing::info!(
        target: "interaction.button",
        user = user.get(),
        channel = component.channel_id.get(),
        "show players pressed"
    );
    let channels = state.channels.read().await.clone();
    let Some(platform) = channels.resolve(component.channel_id) else {
        respond(&ctx, &component, message(channels.scope_guidance("show"))).await;
        return;
    };

    match presence::online_roster(&state, platform).await {
        Ok(profiles) => {
            let response = CreateInteractionResponseMessage::new()
                .embeds(roster_embeds(&profiles, Utc::now()))
                .ephemeral(true);
            respond(&ctx, &component, response).await;
        }
        Err(e) => {
            state.telemetry.notify("store.list_online", &e);
        }
    }
}

/// The Go Offline shortcut on the online quick controls. Identical to
/// `/offline`, attributed through the button's own id.
pub async fn go_offline(
    ctx: Context,
    component: ComponentInteraction,
    state: Arc<AppState>,
    user: UserId,
) {
    tracing::info!(
        target: "interaction.button",
        user = user.get(),
        channel = component.channel_id.get(),
        "go offline pressed"
    );
    let identity = user.get().to_string();
    match presence::transition_offline(&state, &identity).await {
        Ok(profile) => {
            // The broadcast is public so the lobby sees the departure.
            let response =
                CreateInteractionResponseMessage::new().embed(offline_broadcast(&profile));
            respond(&ctx, &component, response).await;
        }
        Err(StoreError::NotSetUp) => {
            let guidance = not_set_up_message(&state.setup_mention().await);
            respond(&ctx, &component, message(guidance)).await;
        }
        Err(e) => {
            state.telemetry.notify("store.set_offline", &e);
        }
    }
}

fn message(content: String) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true)
}

async fn respond(
    ctx: &Context,
    component: &ComponentInteraction,
    response: CreateInteractionResponseMessage,
) {
    if let Err(e) = component
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await
    {
        tracing::error!(target: "interaction.respond", error = %e, "component response failed");
    }
}
