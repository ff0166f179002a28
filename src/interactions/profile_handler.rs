//! Handlers for the profile-editing controls: the edit buttons, the camp
//! select menu and every modal submission.

use std::sync::Arc;

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::{
    ActionRowComponent, ComponentInteraction, ModalInteraction,
};
use serenity::model::id::UserId;
use serenity::prelude::Context;

use super::forms::FormKind;
use crate::constants::is_known_camp;
use crate::database::players::{ProfilePatch, StoreError};
use crate::ui::controls::camp_select;
use crate::ui::style::not_set_up_message;
use crate::AppState;

const GENERIC_FAILURE: &str =
    "Something went wrong while saving your profile. Please try again later.";

/// Responds to an edit button with the matching modal, tagged with the
/// identity read back out of the button's own id.
pub async fn open_form(
    ctx: Context,
    component: ComponentInteraction,
    _state: Arc<AppState>,
    user: UserId,
    form: FormKind,
) {
    tracing::info!(
        target: "interaction.button",
        user = user.get(),
        custom_id = %component.data.custom_id,
        channel = component.channel_id.get(),
        "edit button pressed"
    );
    let response = CreateInteractionResponse::Modal(form.modal(user));
    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::error!(target: "interaction.button", error = %e, "modal response failed");
    }
}

/// Responds to the Set Camp button with the location select menu.
pub async fn open_camp_select(
    ctx: Context,
    component: ComponentInteraction,
    _state: Arc<AppState>,
    user: UserId,
) {
    tracing::info!(
        target: "interaction.button",
        user = user.get(),
        channel = component.channel_id.get(),
        "camp menu requested"
    );
    let message = CreateInteractionResponseMessage::new()
        .content(
            "Set your current camp location.\nYour profile will be updated as soon as you \
             select an option.",
        )
        .components(camp_select(user))
        .ephemeral(true);
    component
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
        .ok();
}

/// A camp location was chosen from the select menu.
pub async fn camp_selected(
    ctx: Context,
    component: ComponentInteraction,
    state: Arc<AppState>,
    user: UserId,
    value: Option<String>,
) {
    let Some(camp) = value else {
        tracing::warn!(target: "interaction.select", user = user.get(), "camp selection without a value");
        return;
    };
    let camp = camp.trim().to_string();
    // The menu is the only writer of this field; anything outside the closed
    // set means a stale or forged component.
    if !is_known_camp(&camp) {
        tracing::warn!(target: "interaction.select", user = user.get(), camp = %camp, "camp value outside the known set");
        respond_ephemeral(&ctx, &component, GENERIC_FAILURE.to_string()).await;
        return;
    }

    let identity = user.get().to_string();
    let patch = ProfilePatch::default().camp(camp.clone());
    let content = match state.store.merge_fields(&identity, patch).await {
        Ok(_) => format!("Your camp location is now set to **{camp}**"),
        Err(StoreError::NotSetUp) => not_set_up_message(&state.setup_mention().await),
        Err(e) => {
            state.telemetry.notify("store.merge_camp", &e);
            GENERIC_FAILURE.to_string()
        }
    };
    respond_ephemeral(&ctx, &component, content).await;
}

/// A modal form was submitted. The schema resolved from the custom_id both
/// validates arity and maps values into a partial update.
pub async fn form_submitted(
    ctx: Context,
    modal: ModalInteraction,
    state: Arc<AppState>,
    form: FormKind,
    user: UserId,
) {
    tracing::info!(
        target: "interaction.modal",
        user = user.get(),
        form = form.custom_id_base(),
        "modal submitted"
    );
    let values = match form.extract(row_values(&modal)) {
        Ok(values) => values,
        Err(e) => {
            // Schema drift between render and submission; fail this one
            // interaction loudly, never the process.
            state.telemetry.notify("form.extract", &e);
            respond_modal_ephemeral(&ctx, &modal, GENERIC_FAILURE.to_string()).await;
            return;
        }
    };
    let patch = form.patch_from_values(&values);
    let identity = user.get().to_string();

    let content = match form {
        FormKind::Setup => {
            let name = display_name(&modal);
            match state.store.upsert_on_setup(&identity, &name, patch).await {
                Ok((_, true)) => "Success! Your initial profile info is now set. You can now \
                                  go online, offline and show other online players."
                    .to_string(),
                Ok((_, false)) => "Success! Your profile has been updated.".to_string(),
                Err(e) => {
                    state.telemetry.notify("store.setup", &e);
                    GENERIC_FAILURE.to_string()
                }
            }
        }
        FormKind::SetBounty => match state.store.merge_fields(&identity, patch).await {
            Ok(profile) => format!("Your bounty is now set to **${}**", profile.bounty),
            Err(StoreError::NotSetUp) => not_set_up_message(&state.setup_mention().await),
            Err(e) => {
                state.telemetry.notify("store.merge_bounty", &e);
                GENERIC_FAILURE.to_string()
            }
        },
        FormKind::SetFooter => match state.store.merge_fields(&identity, patch).await {
            Ok(_) => "Your footer message is set. Feel free to change it anytime.".to_string(),
            Err(StoreError::NotSetUp) => not_set_up_message(&state.setup_mention().await),
            Err(e) => {
                state.telemetry.notify("store.merge_footer", &e);
                GENERIC_FAILURE.to_string()
            }
        },
        FormKind::SetRockstarId => match state.store.merge_fields(&identity, patch).await {
            Ok(_) => "Successfully updated your Rockstar ID.".to_string(),
            Err(StoreError::NotSetUp) => not_set_up_message(&state.setup_mention().await),
            Err(e) => {
                state.telemetry.notify("store.merge_rid", &e);
                GENERIC_FAILURE.to_string()
            }
        },
    };
    respond_modal_ephemeral(&ctx, &modal, content).await;
}

/// First text input of each action row, in submission order. `None` marks a
/// row without one, which the schema rejects as malformed.
fn row_values(modal: &ModalInteraction) -> Vec<Option<String>> {
    modal
        .data
        .components
        .iter()
        .map(|row| {
            row.components.iter().find_map(|component| match component {
                ActionRowComponent::InputText(input) => {
                    Some(input.value.clone().unwrap_or_default())
                }
                _ => None,
            })
        })
        .collect()
}

/// Guild nickname when set, otherwise the account name.
fn display_name(modal: &ModalInteraction) -> String {
    modal
        .member
        .as_ref()
        .and_then(|m| m.nick.clone())
        .unwrap_or_else(|| modal.user.name.clone())
}

async fn respond_ephemeral(ctx: &Context, component: &ComponentInteraction, content: String) {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    if let Err(e) = component
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!(target: "interaction.respond", error = %e, "component response failed");
    }
}

async fn respond_modal_ephemeral(ctx: &Context, modal: &ModalInteraction, content: String) {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    if let Err(e) = modal
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!(target: "interaction.respond", error = %e, "modal response failed");
    }
}
