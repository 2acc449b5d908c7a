//! End-to-end portal flow: demo directory, login, durable session,
//! simulated restart, role routing, dashboard search, sign-out.

use std::sync::Arc;

use tempfile::tempdir;

use mediport::dashboard::DashboardData;
use mediport::directory::MemoryDirectory;
use mediport::identity::{
    route, AuthProvider, CredentialGate, DirectoryAuthProvider, Route, SessionMirror, SessionStore,
    UserType, KEY_AUTH_USER,
};
use mediport::server::seed_demo_users;

fn demo_provider() -> DirectoryAuthProvider {
    let directory = MemoryDirectory::new();
    seed_demo_users(&directory);
    DirectoryAuthProvider::new(Arc::new(directory))
}

#[tokio::test]
async fn full_login_restart_and_signout_flow() {
    let tmp = tempdir().unwrap();
    let provider = demo_provider();

    // Arrive unauthenticated.
    let store = SessionStore::new(SessionMirror::new(tmp.path()));
    store.restore();
    assert_eq!(route(&store), Route::CredentialGate);

    // Type hospital credentials through the gate.
    let mut gate = CredentialGate::new(UserType::Hospital);
    gate.set_field1("admin@stvincent.org");
    gate.set_field2("stvincent");
    assert!(gate.is_valid());
    let session = gate.submit(&provider).await.expect("login succeeds");
    store.set_session(Some(session.clone()));
    assert_eq!(route(&store), Route::Dashboard { user_type: UserType::Hospital });

    // Simulated restart: a fresh store over the same data root restores
    // the identical session.
    let restarted = SessionStore::new(SessionMirror::new(tmp.path()));
    restarted.restore();
    assert_eq!(restarted.current(), Some(session));

    // The restored payload still answers the roster searches.
    let Some(DashboardData::Hospital(h)) = restarted.current().unwrap().data else {
        panic!("expected a hospital payload");
    };
    assert_eq!(h.filter_patients("").len(), h.patients_data.len());
    let hits = h.filter_patients("avery");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Jordan Avery");
    assert!(h.filter_patients("pt-10022").len() == 1);
    assert!(h.filter_performance("ngata").len() == 1);

    // Sign out: memory and mirror both cleared, back on the gate.
    restarted.logout();
    assert_eq!(route(&restarted), Route::CredentialGate);
    let mirror = SessionMirror::new(tmp.path());
    assert!(!mirror.contains(KEY_AUTH_USER));
}

#[tokio::test]
async fn failed_login_leaves_no_trace() {
    let tmp = tempdir().unwrap();
    let provider = demo_provider();
    let store = SessionStore::new(SessionMirror::new(tmp.path()));

    let out = provider.authenticate("5551234567", "0000", UserType::Patient).await;
    assert!(out.is_err());
    assert_eq!(store.current(), None);
    assert_eq!(route(&store), Route::CredentialGate);
    assert!(!SessionMirror::new(tmp.path()).contains(KEY_AUTH_USER));
}

#[tokio::test]
async fn insurance_search_over_the_demo_payload() {
    let provider = demo_provider();
    let session = provider
        .authenticate("ops@blueshieldplus.com", "coverage", UserType::Insurance)
        .await
        .expect("login succeeds");
    let Some(DashboardData::Insurance(i)) = session.data else {
        panic!("expected an insurance payload");
    };
    assert_eq!(i.filter_members("").len(), i.active_members.len());
    assert_eq!(i.filter_members("BSP-5120").len(), 1);
    assert_eq!(i.filter_members("priya").len(), 1);
    assert_eq!(i.filter_hospitals("riverside").len(), 1);
    assert_eq!(i.filter_hospitals("no such place").len(), 0);
}
