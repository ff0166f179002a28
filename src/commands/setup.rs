//! Implements the `/setup` command: opens the three-field profile modal.

use std::sync::Arc;

use serenity::builder::{CreateCommand, CreateInteractionResponse};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

use crate::interactions::forms::FormKind;
use crate::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("setup").description("Initial Red Dead Online profile setup.")
}

pub async fn run_slash(ctx: Context, interaction: CommandInteraction, _state: Arc<AppState>) {
    tracing::info!(
        target: "command.setup",
        user = %interaction.user.name,
        channel = interaction.channel_id.get(),
        "/setup used"
    );
    let modal = FormKind::Setup.modal(interaction.user.id);
    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Modal(modal))
        .await
    {
        tracing::error!(target: "command.setup", error = %e, "modal response failed");
    }
}
