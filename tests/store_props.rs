//! Behavioural properties of the profile store, exercised against the
//! in-memory implementation (which shares its merge/transition helpers with
//! the Postgres store).

use chrono::{Duration, Utc};

use rdo_presence_bot::database::players::{retention_window, ProfilePatch, StoreError};
use rdo_presence_bot::database::{MemoryProfileStore, ProfileStore};
use rdo_presence_bot::platform::Platform;

const U1: &str = "100000000000000001";
const U2: &str = "100000000000000002";
const U3: &str = "100000000000000003";

fn setup_patch() -> ProfilePatch {
    ProfilePatch::default()
        .rockstar_id("123456789")
        .bounty("19.99")
}

#[tokio::test]
async fn operations_on_unknown_identity_report_not_set_up() {
    let store = MemoryProfileStore::new();
    assert!(store.get(U1).await.unwrap().is_none());
    assert!(matches!(
        store.merge_fields(U1, ProfilePatch::default().bounty("5")).await,
        Err(StoreError::NotSetUp)
    ));
    assert!(matches!(
        store.set_online(U1, Platform::Pc).await,
        Err(StoreError::NotSetUp)
    ));
    assert!(matches!(
        store.set_offline(U1).await,
        Err(StoreError::NotSetUp)
    ));
    // No record was created implicitly by any of the failed calls.
    assert!(store.get(U1).await.unwrap().is_none());
}

#[tokio::test]
async fn first_setup_creates_with_supplied_fields_only() {
    let store = MemoryProfileStore::new();
    let (profile, created) = store
        .upsert_on_setup(U1, "Arthur", setup_patch())
        .await
        .unwrap();
    assert!(created);
    assert_eq!(profile.name, "Arthur");
    assert_eq!(profile.rockstar_id, "123456789");
    assert_eq!(profile.bounty, "19.99");
    assert_eq!(profile.footer, "");
    assert_eq!(profile.camp, "");
    assert!(!profile.online);
}

#[tokio::test]
async fn repeat_setup_merges_and_never_erases() {
    let store = MemoryProfileStore::new();
    store
        .upsert_on_setup(U1, "Arthur", setup_patch())
        .await
        .unwrap();

    // Same values again: idempotent on supplied fields.
    let (profile, created) = store
        .upsert_on_setup(U1, "Arthur", setup_patch())
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(profile.rockstar_id, "123456789");
    assert_eq!(profile.bounty, "19.99");

    // Empty submission: nothing stored is erased, the name still refreshes.
    let (profile, created) = store
        .upsert_on_setup(U1, "Dutch", ProfilePatch::default())
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(profile.name, "Dutch");
    assert_eq!(profile.rockstar_id, "123456789");
    assert_eq!(profile.bounty, "19.99");
}

#[tokio::test]
async fn every_mutation_advances_the_expiry_stamp() {
    let store = MemoryProfileStore::new();
    let tolerance = Duration::seconds(5);
    let expect_fresh = |profile: &rdo_presence_bot::database::Profile| {
        let expected = Utc::now() + retention_window();
        assert!(
            (profile.expires_at - expected).abs() < tolerance,
            "expiry {:?} not within tolerance of now + 365d",
            profile.expires_at
        );
    };

    let (profile, _) = store
        .upsert_on_setup(U1, "Arthur", setup_patch())
        .await
        .unwrap();
    expect_fresh(&profile);

    let profile = store
        .merge_fields(U1, ProfilePatch::default().camp("Tall Trees"))
        .await
        .unwrap();
    expect_fresh(&profile);

    let profile = store.set_online(U1, Platform::Ps4).await.unwrap();
    expect_fresh(&profile);

    let profile = store.set_offline(U1).await.unwrap();
    expect_fresh(&profile);
}

#[tokio::test]
async fn online_transition_scopes_to_the_resolved_platform() {
    let store = MemoryProfileStore::new();
    store
        .upsert_on_setup(U1, "Arthur", setup_patch())
        .await
        .unwrap();

    let before = Utc::now();
    let profile = store.set_online(U1, Platform::Ps4).await.unwrap();
    assert!(profile.online);
    assert_eq!(profile.platform, "PS4");
    assert!(profile.last_transition_at >= before);

    let ps4: Vec<_> = store.list_online(Platform::Ps4).await.unwrap();
    assert!(ps4.iter().any(|p| p.discord_id == U1));
    let pc: Vec<_> = store.list_online(Platform::Pc).await.unwrap();
    assert!(pc.iter().all(|p| p.discord_id != U1));
}

#[tokio::test]
async fn offline_removes_from_every_roster_but_keeps_platform() {
    let store = MemoryProfileStore::new();
    store
        .upsert_on_setup(U1, "Arthur", setup_patch())
        .await
        .unwrap();
    store.set_online(U1, Platform::Ps4).await.unwrap();

    let profile = store.set_offline(U1).await.unwrap();
    assert!(!profile.online);
    // Stale platform tag is retained on purpose; it is never read while
    // offline.
    assert_eq!(profile.platform, "PS4");

    for platform in Platform::ALL {
        let roster = store.list_online(platform).await.unwrap();
        assert!(roster.iter().all(|p| p.discord_id != U1));
    }
}

#[tokio::test]
async fn offline_is_idempotent() {
    let store = MemoryProfileStore::new();
    store
        .upsert_on_setup(U1, "Arthur", setup_patch())
        .await
        .unwrap();
    store.set_online(U1, Platform::Pc).await.unwrap();
    let first = store.set_offline(U1).await.unwrap();
    let second = store.set_offline(U1).await.unwrap();
    assert!(!second.online);
    assert!(second.last_transition_at >= first.last_transition_at);
    assert!(second.expires_at >= first.expires_at);
}

#[tokio::test]
async fn reentrant_online_overwrites_platform() {
    let store = MemoryProfileStore::new();
    store
        .upsert_on_setup(U1, "Arthur", setup_patch())
        .await
        .unwrap();
    store.set_online(U1, Platform::Pc).await.unwrap();
    let profile = store.set_online(U1, Platform::Xbox).await.unwrap();
    assert_eq!(profile.platform, "XBOX");

    let pc = store.list_online(Platform::Pc).await.unwrap();
    assert!(pc.iter().all(|p| p.discord_id != U1));
    let xbox = store.list_online(Platform::Xbox).await.unwrap();
    assert!(xbox.iter().any(|p| p.discord_id == U1));
}

#[tokio::test]
async fn concurrent_online_calls_leave_one_consistent_state() {
    let store = std::sync::Arc::new(MemoryProfileStore::new());
    store
        .upsert_on_setup(U1, "Arthur", setup_patch())
        .await
        .unwrap();

    let a = tokio::spawn({
        let store = store.clone();
        async move { store.set_online(U1, Platform::Pc).await }
    });
    let b = tokio::spawn({
        let store = store.clone();
        async move { store.set_online(U1, Platform::Ps4).await }
    });
    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();

    // Whichever merge landed last wins; the record is whole either way.
    let profile = store.get(U1).await.unwrap().unwrap();
    assert!(profile.online);
    assert!(profile.platform == "PC" || profile.platform == "PS4");
    let winner = Platform::from_tag(&profile.platform).unwrap();
    let roster = store.list_online(winner).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].discord_id, U1);
}

#[tokio::test]
async fn roster_orders_by_oldest_session_first() {
    let store = MemoryProfileStore::new();
    for (id, name) in [(U1, "Arthur"), (U2, "Dutch"), (U3, "Hosea")] {
        store
            .upsert_on_setup(id, name, ProfilePatch::default())
            .await
            .unwrap();
    }
    store.set_online(U2, Platform::Pc).await.unwrap();
    store.set_online(U1, Platform::Pc).await.unwrap();
    store.set_online(U3, Platform::Pc).await.unwrap();

    let roster = store.list_online(Platform::Pc).await.unwrap();
    assert_eq!(roster.len(), 3);
    for pair in roster.windows(2) {
        assert!(pair[0].last_transition_at <= pair[1].last_transition_at);
    }
    assert_eq!(roster[0].discord_id, U2);
}

#[tokio::test]
async fn camp_selection_merges_into_the_record() {
    let store = MemoryProfileStore::new();
    store
        .upsert_on_setup(U1, "Arthur", setup_patch())
        .await
        .unwrap();
    let profile = store
        .merge_fields(U1, ProfilePatch::default().camp("Tall Trees"))
        .await
        .unwrap();
    assert_eq!(profile.camp, "Tall Trees");
    // The other fields are untouched.
    assert_eq!(profile.bounty, "19.99");
    assert_eq!(profile.rockstar_id, "123456789");
}

#[tokio::test]
async fn reaper_deletes_only_elapsed_records() {
    let store = MemoryProfileStore::new();
    store
        .upsert_on_setup(U1, "Arthur", ProfilePatch::default())
        .await
        .unwrap();
    store
        .upsert_on_setup(U2, "Dutch", ProfilePatch::default())
        .await
        .unwrap();

    // Nothing has elapsed yet.
    assert_eq!(store.reap_expired(Utc::now()).await.unwrap(), 0);
    assert!(store.get(U1).await.unwrap().is_some());

    // Past the retention window both records are eligible.
    let far_future = Utc::now() + retention_window() + Duration::days(1);
    assert_eq!(store.reap_expired(far_future).await.unwrap(), 2);
    assert!(store.get(U1).await.unwrap().is_none());
    assert!(store.get(U2).await.unwrap().is_none());
}
