//! Central UI style constants and helpers.

use crate::constants::{AVATAR_UNKNOWN_URL, AVATAR_URL_PREFIX, AVATAR_URL_SUFFIX};

pub const COLOR_WHITE: u32 = 16777215;
pub const COLOR_GREY: u32 = 10070709;
pub const COLOR_DARK: u32 = 2895667;
pub const COLOR_GREEN: u32 = 5763719;
pub const COLOR_RED: u32 = 15548997;

/// Avatar URL for a profile: the Social Club pedshot when a Rockstar ID is
/// set, the generic placeholder otherwise.
pub fn avatar_url(rockstar_id: &str) -> String {
    if rockstar_id.is_empty() {
        AVATAR_UNKNOWN_URL.to_string()
    } else {
        format!("{AVATAR_URL_PREFIX}{rockstar_id}{AVATAR_URL_SUFFIX}")
    }
}

/// Guidance for members who have not completed setup. `setup_mention` is the
/// clickable `</setup:id>` mention when the command id is known.
pub fn not_set_up_message(setup_mention: &str) -> String {
    format!("You have not set up your profile. \nPlease use {setup_mention} to start. 🤠")
}
