//! Interaction classification and dispatch.
//!
//! The router owns two immutable lookup tables built once at startup:
//! slash-command name -> handler and component family -> handler. Modal
//! submissions resolve through the form schema table instead. Unknown names
//! and ids are ignored on purpose; stray clicks on legacy components must
//! not surface errors.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use serenity::model::application::{
    CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Interaction,
    ModalInteraction,
};
use serenity::model::id::UserId;
use serenity::prelude::Context;

use super::forms::FormKind;
use super::ids::split_user_tag;
use super::{presence_handler, profile_handler};
use crate::commands;
use crate::AppState;

pub type SlashHandler =
    fn(Context, CommandInteraction, Arc<AppState>) -> BoxFuture<'static, ()>;

/// Component handlers receive the member identity recovered from the
/// control's own custom_id, plus the select value when one was made.
pub type ComponentHandler = fn(
    Context,
    ComponentInteraction,
    Arc<AppState>,
    UserId,
    Option<String>,
) -> BoxFuture<'static, ()>;

pub struct Router {
    commands: HashMap<&'static str, SlashHandler>,
    components: HashMap<&'static str, ComponentHandler>,
}

impl Router {
    /// The production dispatch tables. Constructed once in `main` and handed
    /// to the event handler; nothing mutates them afterwards.
    pub fn standard() -> Self {
        let mut commands: HashMap<&'static str, SlashHandler> = HashMap::new();
        commands.insert("setup", |ctx, i, s| {
            Box::pin(commands_setup(ctx, i, s))
        });
        commands.insert("me", |ctx, i, s| Box::pin(commands::me::run_slash(ctx, i, s)));
        commands.insert("online", |ctx, i, s| {
            Box::pin(commands::online::run_slash(ctx, i, s))
        });
        commands.insert("offline", |ctx, i, s| {
            Box::pin(commands::offline::run_slash(ctx, i, s))
        });
        commands.insert("show", |ctx, i, s| {
            Box::pin(commands::show::run_slash(ctx, i, s))
        });

        let mut components: HashMap<&'static str, ComponentHandler> = HashMap::new();
        components.insert(super::ids::SET_BOUNTY, |ctx, c, s, u, _| {
            Box::pin(profile_handler::open_form(ctx, c, s, u, FormKind::SetBounty))
        });
        components.insert(super::ids::SET_FOOTER, |ctx, c, s, u, _| {
            Box::pin(profile_handler::open_form(ctx, c, s, u, FormKind::SetFooter))
        });
        components.insert(super::ids::SET_RID, |ctx, c, s, u, _| {
            Box::pin(profile_handler::open_form(
                ctx,
                c,
                s,
                u,
                FormKind::SetRockstarId,
            ))
        });
        components.insert(super::ids::SET_CAMP, |ctx, c, s, u, _| {
            Box::pin(profile_handler::open_camp_select(ctx, c, s, u))
        });
        components.insert(super::ids::CAMP_SELECT, |ctx, c, s, u, value| {
            Box::pin(profile_handler::camp_selected(ctx, c, s, u, value))
        });
        components.insert(super::ids::SHOW_PLAYERS, |ctx, c, s, u, _| {
            Box::pin(presence_handler::show_players(ctx, c, s, u))
        });
        components.insert(super::ids::GO_OFFLINE, |ctx, c, s, u, _| {
            Box::pin(presence_handler::go_offline(ctx, c, s, u))
        });

        Self {
            commands,
            components,
        }
    }

    pub async fn dispatch(&self, ctx: Context, interaction: Interaction, state: Arc<AppState>) {
        match interaction {
            Interaction::Command(command) => {
                let name = command.data.name.clone();
                match self.commands.get(name.as_str()) {
                    Some(handler) => handler(ctx, command, state).await,
                    None => {
                        tracing::debug!(target: "router", command = %name, "unknown slash command ignored");
                    }
                }
            }
            Interaction::Component(component) => {
                self.dispatch_component(ctx, component, state).await;
            }
            Interaction::Modal(modal) => {
                dispatch_modal(ctx, modal, state).await;
            }
            _ => {}
        }
    }

    async fn dispatch_component(
        &self,
        ctx: Context,
        component: ComponentInteraction,
        state: Arc<AppState>,
    ) {
        let custom_id = component.data.custom_id.clone();
        let Some((family, user)) = split_user_tag(&custom_id) else {
            tracing::debug!(target: "router", custom_id = %custom_id, "untagged component id ignored");
            return;
        };
        let Some(handler) = self.components.get(family) else {
            tracing::debug!(target: "router", custom_id = %custom_id, "unknown component family ignored");
            return;
        };
        let value = match &component.data.kind {
            ComponentInteractionDataKind::StringSelect { values } => values.first().cloned(),
            _ => None,
        };
        handler(ctx, component, state, user, value).await;
    }
}

// Thin wrapper: `/setup` needs no state beyond the modal itself, but the
// handler signature is uniform across the table.
async fn commands_setup(ctx: Context, interaction: CommandInteraction, state: Arc<AppState>) {
    commands::setup::run_slash(ctx, interaction, state).await;
}

async fn dispatch_modal(ctx: Context, modal: ModalInteraction, state: Arc<AppState>) {
    let custom_id = modal.data.custom_id.clone();
    let Some((form, user)) = FormKind::from_custom_id(&custom_id) else {
        tracing::debug!(target: "router", custom_id = %custom_id, "unknown modal id ignored");
        return;
    };
    profile_handler::form_submitted(ctx, modal, state, form, user).await;
}
