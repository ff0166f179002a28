//! Centralized custom_id string constants for interaction components.
//!
//! Every control rendered for a specific member carries that member's id as
//! a trailing segment (`set_bounty_123456789`). A later completion event is
//! attributed by reading the identity back out of the id, so no server-side
//! pending-interaction table is needed even under concurrent use.

use serenity::model::id::UserId;

// Edit buttons (also the custom_id bases of their follow-up modals).
pub const SET_BOUNTY: &str = "set_bounty";
pub const SET_CAMP: &str = "set_camp";
pub const SET_FOOTER: &str = "set_footer";
pub const SET_RID: &str = "set_rid";

// Quick-control buttons on the online broadcast followup.
pub const SHOW_PLAYERS: &str = "show_players";
pub const GO_OFFLINE: &str = "go_offline";

// The camp location select menu.
pub const CAMP_SELECT: &str = "camp_selection";

// The setup modal.
pub const SETUP_FORM: &str = "setup";

// Modal text input ids.
pub const RID_INPUT: &str = "rid_input";
pub const BOUNTY_INPUT: &str = "bounty_input";
pub const FOOTER_INPUT: &str = "footer_input";

/// Appends the acting member's id to a base custom_id.
pub fn tag_user(base: &str, user: UserId) -> String {
    format!("{base}_{user}")
}

/// Splits a tagged custom_id into its family and the member it was rendered
/// for. Returns `None` when the trailing segment is not a user id.
pub fn split_user_tag(custom_id: &str) -> Option<(&str, UserId)> {
    let (family, tail) = custom_id.rsplit_once('_')?;
    let user = tail.parse::<u64>().ok().filter(|id| *id != 0)?;
    Some((family, UserId::new(user)))
}
