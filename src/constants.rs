// Central constants for profile retention, closed vocabularies and field limits.

/// Retention window stamped onto a profile by every successful mutation.
/// A record that goes a full year without being touched is reaped.
pub const PROFILE_TTL_DAYS: i64 = 365;

/// Cadence of the background expiry sweep.
pub const REAPER_INTERVAL_SECS: u64 = 1;

/// Rockstar Social Club avatar URL parts. The avatar image lives at
/// `<prefix><rockstar_id><suffix>`; profiles without a Rockstar ID fall back
/// to the generic placeholder.
pub const AVATAR_URL_PREFIX: &str =
    "https://prod-cdnugc-rockstargames.akamaized.net/rdr2/pedshot/pcros/";
pub const AVATAR_URL_SUFFIX: &str = "/pedshot_0.jpg";
pub const AVATAR_UNKNOWN_URL: &str = "https://a.rsg.sc/s/RDR2/n/RedDeadRedemption234.png";

/// The closed set of camp locations offered by the camp select menu.
pub const CAMP_LOCATIONS: [&str; 13] = [
    "Bayou Nwa",
    "Big Valley",
    "Cholla Springs",
    "Cumberland Forest",
    "Gaptooth Ridge",
    "Great Plains",
    "Grizzlies",
    "Heartlands",
    "Hennigan's Stead",
    "Rio Bravo",
    "Roanoke Ridge",
    "Scarlett Meadows",
    "Tall Trees",
];

// Modal field limits. The bounty is an opaque string with a length bound only;
// no numeric validation is applied server-side.
pub const ROCKSTAR_ID_LEN: u16 = 9;
pub const BOUNTY_MIN_LEN: u16 = 1;
pub const BOUNTY_MAX_LEN: u16 = 5;
pub const FOOTER_MAX_LEN: u16 = 42;

/// Returns true when `camp` is one of the named locations from the menu.
pub fn is_known_camp(camp: &str) -> bool {
    CAMP_LOCATIONS.contains(&camp)
}
