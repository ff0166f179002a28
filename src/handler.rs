//! The Serenity event handler: wires gateway events to the router, the role
//! self-assignment handlers and guild preparation at ready.

use serenity::async_trait;
use serenity::model::application::Interaction;
use serenity::model::channel::Reaction;
use serenity::model::gateway::Ready;
use serenity::model::guild::Member;
use serenity::prelude::{Context, EventHandler};

use crate::interactions::Router;
use crate::{roles, startup, AppState};

pub struct Handler {
    router: Router,
}

impl Handler {
    /// The dispatch tables are built once and owned here; nothing mutates
    /// them after construction.
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target: "gateway", user = %ready.user.name, "connected and ready");
        let Some(state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        startup::prepare(&ctx, &state).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        self.router.dispatch(ctx, interaction, state).await;
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        let Some(state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        roles::reaction_added(ctx, state, reaction).await;
    }

    async fn reaction_remove(&self, ctx: Context, reaction: Reaction) {
        let Some(state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        roles::reaction_removed(ctx, state, reaction).await;
    }

    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        let Some(state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        roles::welcome_member(ctx, state, new_member).await;
    }
}
