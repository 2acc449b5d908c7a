use std::path::Path;

use crate::dashboard::{samples, DashboardData};
use crate::identity::{Session, SessionMirror, SessionStore, UserType};

/// A fully-populated session for the given role.
pub fn session_for(user_type: UserType) -> Session {
    let data = match user_type {
        UserType::Patient => DashboardData::Patient(samples::patient()),
        UserType::Doctor => DashboardData::Doctor(samples::doctor()),
        UserType::Hospital => DashboardData::Hospital(samples::hospital()),
        UserType::Insurance => DashboardData::Insurance(samples::insurance()),
    };
    Session {
        id: 42,
        field1: "5551234567".into(),
        field2: "1234".into(),
        data: Some(data),
        role: user_type.role_index(),
        user_type,
    }
}

/// A session store mirrored under the given root.
pub fn store_at(root: &Path) -> SessionStore {
    SessionStore::new(SessionMirror::new(root))
}
