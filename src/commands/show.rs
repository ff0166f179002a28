//! Implements the `/show` command: the online roster for the channel's
//! platform, oldest session first.

use std::sync::Arc;

use chrono::Utc;
use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

use crate::presence;
use crate::ui::roster::roster_embeds;
use crate::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("show").description("See who is currently online.")
}

pub async fn run_slash(ctx: Context, interaction: CommandInteraction, state: Arc<AppState>) {
    tracing::info!(
        target: "command.show",
        user = %interaction.user.name,
        channel = interaction.channel_id.get(),
        "/show used"
    );
    let channels = state.channels.read().await.clone();
    let Some(platform) = channels.resolve(interaction.channel_id) else {
        let message = CreateInteractionResponseMessage::new()
            .content(channels.scope_guidance("show"))
            .ephemeral(true);
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
            .ok();
        return;
    };

    match presence::online_roster(&state, platform).await {
        Ok(profiles) => {
            let message = CreateInteractionResponseMessage::new()
                .embeds(roster_embeds(&profiles, Utc::now()))
                .ephemeral(true);
            interaction
                .create_response(&ctx.http, CreateInteractionResponse::Message(message))
                .await
                .ok();
        }
        Err(e) => {
            state.telemetry.notify("store.list_online", &e);
        }
    }
}
