use serenity::model::id::UserId;

use rdo_presence_bot::interactions::forms::FormKind;
use rdo_presence_bot::interactions::ids::{self, split_user_tag, tag_user};

#[test]
fn tag_and_split_round_trip() {
    let user = UserId::new(123456789012345678);
    let id = tag_user(ids::SET_BOUNTY, user);
    assert_eq!(id, "set_bounty_123456789012345678");
    let (family, parsed) = split_user_tag(&id).expect("should split");
    assert_eq!(family, ids::SET_BOUNTY);
    assert_eq!(parsed, user);
}

#[test]
fn split_rejects_untagged_ids() {
    assert!(split_user_tag("set_bounty").is_none());
    assert!(split_user_tag("set_bounty_").is_none());
    assert!(split_user_tag("set_bounty_notanumber").is_none());
    assert!(split_user_tag("set_bounty_0").is_none());
    assert!(split_user_tag("").is_none());
}

#[test]
fn nested_families_keep_their_full_prefix() {
    let user = UserId::new(42);
    let camp_id = tag_user(ids::CAMP_SELECT, user);
    let (family, parsed) = split_user_tag(&camp_id).unwrap();
    assert_eq!(family, "camp_selection");
    assert_eq!(parsed, user);

    let offline_id = tag_user(ids::GO_OFFLINE, user);
    let (family, _) = split_user_tag(&offline_id).unwrap();
    assert_eq!(family, "go_offline");
}

#[test]
fn form_kind_resolves_from_modal_ids() {
    let user = UserId::new(7);
    for (kind, base) in [
        (FormKind::Setup, "setup"),
        (FormKind::SetBounty, "set_bounty"),
        (FormKind::SetFooter, "set_footer"),
        (FormKind::SetRockstarId, "set_rid"),
    ] {
        let id = tag_user(base, user);
        let (resolved, parsed) = FormKind::from_custom_id(&id).expect("known form");
        assert_eq!(resolved, kind);
        assert_eq!(parsed, user);
    }
    assert!(FormKind::from_custom_id("legacy_button_7").is_none());
    assert!(FormKind::from_custom_id("setup").is_none());
}
