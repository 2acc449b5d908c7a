use super::fixtures::{session_for, store_at};
use crate::identity::{
    route, select_dashboard, sign_out, DashboardView, Route, SessionMirror, UserType, KEY_AUTH_USER,
};

#[test]
fn no_session_routes_to_the_gate() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_at(tmp.path());
    assert_eq!(route(&store), Route::CredentialGate);
}

#[test]
fn active_session_routes_to_its_dashboard() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_at(tmp.path());
    for t in UserType::ALL {
        store.set_session(Some(session_for(t)));
        assert_eq!(route(&store), Route::Dashboard { user_type: t });
    }
}

#[test]
fn dashboard_selection_is_total_over_the_roles() {
    assert_eq!(select_dashboard(&session_for(UserType::Patient)), DashboardView::Patient);
    assert_eq!(select_dashboard(&session_for(UserType::Doctor)), DashboardView::Doctor);
    assert_eq!(select_dashboard(&session_for(UserType::Hospital)), DashboardView::Hospital);
    assert_eq!(select_dashboard(&session_for(UserType::Insurance)), DashboardView::Insurance);
}

#[test]
fn sign_out_lands_back_on_the_gate() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_at(tmp.path());
    store.set_session(Some(session_for(UserType::Doctor)));
    assert_eq!(sign_out(&store), Route::CredentialGate);
    assert_eq!(store.current(), None);
}

#[test]
fn corrupt_restore_routes_to_the_gate() {
    let tmp = tempfile::tempdir().unwrap();
    let mirror = SessionMirror::new(tmp.path());
    mirror.write(KEY_AUTH_USER, "garbage").unwrap();

    let store = store_at(tmp.path());
    store.restore();
    assert_eq!(route(&store), Route::CredentialGate);
}
