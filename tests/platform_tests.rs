use serenity::model::id::ChannelId;

use rdo_presence_bot::platform::{GuildChannels, Platform};

fn sample_channels() -> GuildChannels {
    GuildChannels::from_names(vec![
        ("general".to_string(), ChannelId::new(1)),
        ("roles".to_string(), ChannelId::new(2)),
        ("commands".to_string(), ChannelId::new(3)),
        ("bulletin".to_string(), ChannelId::new(4)),
        ("pc".to_string(), ChannelId::new(5)),
        ("ps4".to_string(), ChannelId::new(6)),
        ("xbox-one".to_string(), ChannelId::new(7)),
        ("off-topic".to_string(), ChannelId::new(8)),
    ])
}

#[test]
fn platform_tags_round_trip() {
    for platform in Platform::ALL {
        assert_eq!(Platform::from_tag(platform.tag()), Some(platform));
    }
    assert_eq!(Platform::from_tag("WII"), None);
    assert_eq!(Platform::from_tag(""), None);
}

#[test]
fn lobby_channels_resolve_to_their_platform() {
    let channels = sample_channels();
    assert_eq!(channels.resolve(ChannelId::new(5)), Some(Platform::Pc));
    assert_eq!(channels.resolve(ChannelId::new(6)), Some(Platform::Ps4));
    assert_eq!(channels.resolve(ChannelId::new(7)), Some(Platform::Xbox));
}

#[test]
fn other_channels_are_unscoped() {
    let channels = sample_channels();
    assert_eq!(channels.resolve(ChannelId::new(1)), None);
    assert_eq!(channels.resolve(ChannelId::new(8)), None);
    assert_eq!(channels.resolve(ChannelId::new(999)), None);
}

#[test]
fn unknown_channel_names_are_ignored() {
    let channels = GuildChannels::from_names(vec![
        ("pc".to_string(), ChannelId::new(5)),
        ("playstation".to_string(), ChannelId::new(6)),
    ]);
    assert_eq!(channels.resolve(ChannelId::new(5)), Some(Platform::Pc));
    // "playstation" is not the configured name; nothing resolves to PS4.
    assert_eq!(channels.resolve(ChannelId::new(6)), None);
    assert!(channels.ps4.is_none());
}

#[test]
fn scope_guidance_names_all_three_lobbies() {
    let channels = sample_channels();
    let guidance = channels.scope_guidance("online");
    assert!(guidance.contains("`/online`"));
    assert!(guidance.contains("<#5>"));
    assert!(guidance.contains("<#6>"));
    assert!(guidance.contains("<#7>"));
}
