//! Slash command implementations. Each module exposes `register()` for the
//! bulk overwrite at ready and `run_slash()` for dispatch.

pub mod me;
pub mod offline;
pub mod online;
pub mod setup;
pub mod show;

use serenity::builder::CreateCommand;

/// Every command registered on the guild, in one place for the bulk
/// overwrite.
pub fn all() -> Vec<CreateCommand> {
    vec![
        setup::register(),
        me::register(),
        online::register(),
        offline::register(),
        show::register(),
    ]
}
