//! User-facing rendering: colors, control rows and embeds.

pub mod controls;
pub mod roster;
pub mod style;
