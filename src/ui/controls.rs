//! Button rows and the camp select menu.
//!
//! Every control is rendered for a specific member and carries that member's
//! id in its custom_id, so a later click or submission can be attributed
//! without any session lookup.

use serenity::builder::{
    CreateActionRow, CreateButton, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};
use serenity::model::application::ButtonStyle;
use serenity::model::id::UserId;

use crate::constants::CAMP_LOCATIONS;
use crate::interactions::ids;

/// Quick controls attached to the ephemeral followup of an online broadcast.
pub fn online_controls(user: UserId) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(ids::tag_user(ids::SET_BOUNTY, user))
            .label("Set Bounty")
            .style(ButtonStyle::Primary),
        CreateButton::new(ids::tag_user(ids::SET_CAMP, user))
            .label("Set Camp")
            .style(ButtonStyle::Primary),
        CreateButton::new(ids::tag_user(ids::SET_FOOTER, user))
            .label("Set Footer")
            .style(ButtonStyle::Primary),
        CreateButton::new(ids::tag_user(ids::SHOW_PLAYERS, user))
            .label("Show Players")
            .style(ButtonStyle::Primary),
        CreateButton::new(ids::tag_user(ids::GO_OFFLINE, user))
            .label("Go Offline")
            .style(ButtonStyle::Danger),
    ])]
}

/// Edit controls attached to the `/me` followup.
pub fn profile_controls(user: UserId) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(ids::tag_user(ids::SET_BOUNTY, user))
            .label("Set Bounty")
            .style(ButtonStyle::Secondary),
        CreateButton::new(ids::tag_user(ids::SET_CAMP, user))
            .label("Set Camp")
            .style(ButtonStyle::Secondary),
        CreateButton::new(ids::tag_user(ids::SET_FOOTER, user))
            .label("Set Footer")
            .style(ButtonStyle::Secondary),
        CreateButton::new(ids::tag_user(ids::SET_RID, user))
            .label("Set R* ID")
            .style(ButtonStyle::Secondary),
    ])]
}

/// The 13-option camp location menu.
pub fn camp_select(user: UserId) -> Vec<CreateActionRow> {
    let options = CAMP_LOCATIONS
        .iter()
        .map(|camp| CreateSelectMenuOption::new(*camp, *camp))
        .collect();
    vec![CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            ids::tag_user(ids::CAMP_SELECT, user),
            CreateSelectMenuKind::String { options },
        )
        .placeholder("Choose Location")
        .min_values(1)
        .max_values(1),
    )]
}
