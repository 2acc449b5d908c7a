use super::fixtures::{session_for, store_at};
use crate::identity::{SessionMirror, UserType, KEY_AUTH_USER, KEY_USER_TYPE};

#[test]
fn set_then_restore_after_restart_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let session = session_for(UserType::Insurance);
    {
        let store = store_at(tmp.path());
        store.set_session(Some(session.clone()));
    }
    // Simulated process restart: a fresh store over the same data root.
    let store = store_at(tmp.path());
    assert_eq!(store.current(), None);
    store.restore();
    assert_eq!(store.current(), Some(session));
}

#[test]
fn mirror_writes_both_entries_in_lockstep() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_at(tmp.path());
    store.set_session(Some(session_for(UserType::Doctor)));

    let mirror = SessionMirror::new(tmp.path());
    let raw = mirror.read(KEY_AUTH_USER).unwrap().expect("full session stored");
    assert!(serde_json::from_str::<serde_json::Value>(&raw).is_ok());
    // Legacy entry carries just the role name.
    assert_eq!(mirror.read(KEY_USER_TYPE).unwrap().as_deref(), Some("Doctor"));
}

#[test]
fn corrupt_mirror_is_discarded_and_deleted() {
    let tmp = tempfile::tempdir().unwrap();
    let mirror = SessionMirror::new(tmp.path());
    mirror.write(KEY_AUTH_USER, "{not valid json").unwrap();
    mirror.write(KEY_USER_TYPE, "Patient").unwrap();

    let store = store_at(tmp.path());
    store.restore();
    assert_eq!(store.current(), None);
    assert!(!mirror.contains(KEY_AUTH_USER));
    assert!(!mirror.contains(KEY_USER_TYPE));
}

#[test]
fn logout_clears_memory_and_both_mirror_entries() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_at(tmp.path());
    store.set_session(Some(session_for(UserType::Patient)));
    assert!(store.is_authenticated());

    store.logout();
    assert_eq!(store.current(), None);
    let mirror = SessionMirror::new(tmp.path());
    assert!(!mirror.contains(KEY_AUTH_USER));
    assert!(!mirror.contains(KEY_USER_TYPE));
}

#[test]
fn replacing_a_session_overwrites_the_mirror() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_at(tmp.path());
    store.set_session(Some(session_for(UserType::Patient)));
    store.set_session(Some(session_for(UserType::Hospital)));

    let fresh = store_at(tmp.path());
    fresh.restore();
    assert_eq!(fresh.current().map(|s| s.user_type), Some(UserType::Hospital));
    let mirror = SessionMirror::new(tmp.path());
    assert_eq!(mirror.read(KEY_USER_TYPE).unwrap().as_deref(), Some("Hospital"));
}

#[test]
fn restore_with_no_mirror_is_a_clean_no_session() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_at(tmp.path());
    store.restore();
    assert_eq!(store.current(), None);
}
