//! Embed rendering for broadcasts, the online roster and the `/me` summary.

use chrono::{DateTime, Duration, Utc};
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use super::style::{avatar_url, COLOR_DARK, COLOR_GREEN, COLOR_GREY, COLOR_RED};
use crate::database::players::Profile;
use crate::platform::Platform;

/// Formats an elapsed duration as `1h23m45s`, truncated to whole seconds.
/// Leading zero components are dropped; a sub-second duration is `0s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// The green "is now online" broadcast posted into the platform lobby.
pub fn online_broadcast(profile: &Profile, platform: Platform) -> CreateEmbed {
    CreateEmbed::new()
        .color(COLOR_GREEN)
        .title(format!("{} is now online.", profile.name))
        .thumbnail(avatar_url(&profile.rockstar_id))
        .field("Bounty:", format!("${}", or_dash(&profile.bounty)), true)
        .field("Camp:", or_dash(&profile.camp).to_string(), true)
        .field("Platform:", platform.tag().to_string(), true)
        .footer(CreateEmbedFooter::new(profile.footer.clone()))
}

/// The red "is now offline" broadcast.
pub fn offline_broadcast(profile: &Profile) -> CreateEmbed {
    CreateEmbed::new()
        .color(COLOR_RED)
        .title(format!("{} is now offline.", profile.name))
        .thumbnail(avatar_url(&profile.rockstar_id))
}

/// One summary embed per online profile, in the store's oldest-session-first
/// order; a single placeholder embed when nobody is online.
pub fn roster_embeds(profiles: &[Profile], now: DateTime<Utc>) -> Vec<CreateEmbed> {
    if profiles.is_empty() {
        return vec![CreateEmbed::new()
            .color(COLOR_DARK)
            .description("There are no players online at the moment.")
            .thumbnail(avatar_url(""))];
    }
    profiles
        .iter()
        .map(|p| {
            let elapsed = format_elapsed(now - p.last_transition_at);
            CreateEmbed::new()
                .color(COLOR_GREY)
                .title(p.name.clone())
                .thumbnail(avatar_url(&p.rockstar_id))
                .field("Bounty:", format!("${}", or_dash(&p.bounty)), true)
                .field("Camp:", or_dash(&p.camp).to_string(), true)
                .field("Online:", elapsed, true)
                .footer(CreateEmbedFooter::new(p.footer.clone()))
        })
        .collect()
}

/// The ephemeral profile summary shown by `/me`.
pub fn profile_summary(profile: &Profile) -> CreateEmbed {
    let rid_status = if profile.rockstar_id.is_empty() {
        "R* ID is not set"
    } else {
        "R* ID is set"
    };
    CreateEmbed::new()
        .title("Your current profile data:")
        .description(format!(
            "{rid_status}\n Camp: {}\n Bounty: ${}\n Footer: {}",
            profile.camp, profile.bounty, profile.footer
        ))
        .thumbnail(avatar_url(&profile.rockstar_id))
}
