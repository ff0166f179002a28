//! Implements the `/online` command: the OFFLINE -> ONLINE transition.
//!
//! Only valid inside one of the three platform lobbies; the channel decides
//! the platform, never a guess. Re-issuing while already online simply
//! overwrites platform and timestamps.

use std::sync::Arc;

use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

use crate::database::players::StoreError;
use crate::presence;
use crate::ui::controls::online_controls;
use crate::ui::roster::online_broadcast;
use crate::ui::style::not_set_up_message;
use crate::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("online").description("Flag yourself as online in this channel.")
}

pub async fn run_slash(ctx: Context, interaction: CommandInteraction, state: Arc<AppState>) {
    tracing::info!(
        target: "command.online",
        user = %interaction.user.name,
        channel = interaction.channel_id.get(),
        "/online used"
    );
    let channels = state.channels.read().await.clone();
    let Some(platform) = channels.resolve(interaction.channel_id) else {
        let message = CreateInteractionResponseMessage::new()
            .content(channels.scope_guidance("online"))
            .ephemeral(true);
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
            .ok();
        return;
    };

    let identity = interaction.user.id.get().to_string();
    match presence::transition_online(&state, &identity, platform).await {
        Ok(profile) => {
            // Public broadcast into the lobby, then ephemeral quick controls
            // for the member's session.
            let message = CreateInteractionResponseMessage::new()
                .embed(online_broadcast(&profile, platform));
            interaction
                .create_response(&ctx.http, CreateInteractionResponse::Message(message))
                .await
                .ok();

            let followup = CreateInteractionResponseFollowup::new()
                .content("Quick Controls for your online session:")
                .components(online_controls(interaction.user.id))
                .ephemeral(true);
            if let Err(e) = interaction.create_followup(&ctx.http, followup).await {
                tracing::error!(target: "command.online", error = %e, "quick controls followup failed");
            }
        }
        Err(StoreError::NotSetUp) => {
            let message = CreateInteractionResponseMessage::new()
                .content(not_set_up_message(&state.setup_mention().await))
                .ephemeral(true);
            interaction
                .create_response(&ctx.http, CreateInteractionResponse::Message(message))
                .await
                .ok();
        }
        Err(e) => {
            state.telemetry.notify("store.set_online", &e);
        }
    }
}
