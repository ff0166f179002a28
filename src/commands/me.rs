//! Implements the `/me` command: the profile summary plus edit buttons.

use std::sync::Arc;

use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

use crate::ui::controls::profile_controls;
use crate::ui::roster::profile_summary;
use crate::ui::style::not_set_up_message;
use crate::AppState;

const RID_HOWTO: &str = "Update your profile data below:\n\nTo find your R* ID, visit your \
    Social Club profile here: <https://socialclub.rockstargames.com/games/rdr2/overview>.\n\
    On the tiny avatar of your character do a right-click and click on *Open image in new \
    tab*. In the browser address bar you will notice a 9-digit number (just before \
    */pedshot_0.jpg*) which is your Rockstar ID.\n";

pub fn register() -> CreateCommand {
    CreateCommand::new("me").description("Show and edit your current profile info.")
}

pub async fn run_slash(ctx: Context, interaction: CommandInteraction, state: Arc<AppState>) {
    tracing::info!(
        target: "command.me",
        user = %interaction.user.name,
        channel = interaction.channel_id.get(),
        "/me used"
    );
    let identity = interaction.user.id.get().to_string();
    let profile = match state.store.get(&identity).await {
        Ok(profile) => profile,
        Err(e) => {
            state.telemetry.notify("store.get", &e);
            return;
        }
    };

    let Some(profile) = profile else {
        let message = CreateInteractionResponseMessage::new()
            .content(not_set_up_message(&state.setup_mention().await))
            .ephemeral(true);
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
            .ok();
        return;
    };

    let message = CreateInteractionResponseMessage::new()
        .embed(profile_summary(&profile))
        .ephemeral(true);
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
        .ok();

    let followup = CreateInteractionResponseFollowup::new()
        .content(RID_HOWTO)
        .components(profile_controls(interaction.user.id))
        .ephemeral(true);
    if let Err(e) = interaction.create_followup(&ctx.http, followup).await {
        tracing::error!(target: "command.me", error = %e, "edit controls followup failed");
    }
}
