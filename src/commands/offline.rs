//! Implements the `/offline` command: the ONLINE -> OFFLINE transition.
//! Idempotent — issuing it while already offline still refreshes the
//! retention deadline and re-broadcasts.

use std::sync::Arc;

use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

use crate::database::players::StoreError;
use crate::presence;
use crate::ui::roster::offline_broadcast;
use crate::ui::style::not_set_up_message;
use crate::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("offline").description("Flag yourself as offline in this channel.")
}

pub async fn run_slash(ctx: Context, interaction: CommandInteraction, state: Arc<AppState>) {
    tracing::info!(
        target: "command.offline",
        user = %interaction.user.name,
        channel = interaction.channel_id.get(),
        "/offline used"
    );
    let identity = interaction.user.id.get().to_string();
    match presence::transition_offline(&state, &identity).await {
        Ok(profile) => {
            let message =
                CreateInteractionResponseMessage::new().embed(offline_broadcast(&profile));
            interaction
                .create_response(&ctx.http, CreateInteractionResponse::Message(message))
                .await
                .ok();
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
            state.telemetry.notify("store.set_offline", &e);
        }
    }
}
