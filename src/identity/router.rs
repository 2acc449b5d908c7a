//! Role routing: decide on every render whether the credential gate or a
//! role dashboard is shown. The only automatic redirect in the system is
//! back to the gate when no session exists.

use serde::{Deserialize, Serialize};

use super::session::{Session, SessionStore};
use super::user_type::UserType;

/// What the authenticated area should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Route {
    CredentialGate,
    Dashboard { user_type: UserType },
}

/// The four dashboard surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    Patient,
    Doctor,
    Hospital,
    Insurance,
}

/// Re-derived from the store on every call, so a restore that discarded a
/// corrupt mirror lands back on the gate without any extra signal.
pub fn route(store: &SessionStore) -> Route {
    match store.current() {
        Some(session) => Route::Dashboard { user_type: session.user_type },
        None => Route::CredentialGate,
    }
}

/// Total mapping from the session's role tag to its dashboard. The closed
/// enum makes the "unknown role" branch unrepresentable here; unknown
/// numeric indices are already rejected where directory rows are parsed.
pub fn select_dashboard(session: &Session) -> DashboardView {
    match session.user_type {
        UserType::Patient => DashboardView::Patient,
        UserType::Doctor => DashboardView::Doctor,
        UserType::Hospital => DashboardView::Hospital,
        UserType::Insurance => DashboardView::Insurance,
    }
}

/// The sign-out affordance: clear the store, land on the gate.
pub fn sign_out(store: &SessionStore) -> Route {
    store.logout();
    route(store)
}
