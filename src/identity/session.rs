//! The authenticated identity and its store.
//! The store owns the in-memory `Option<Session>` and a durable mirror on
//! disk; both change together inside `set_session`, so readers always see
//! the last value set or the result of the startup restore.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::mirror::{SessionMirror, KEY_AUTH_USER, KEY_USER_TYPE};
use super::user_type::UserType;
use crate::dashboard::DashboardData;

/// Who is currently logged in. Built only by a successful directory lookup
/// (or restored from the mirror), replaced wholesale, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub field1: String,
    pub field2: String,
    /// Role-shaped payload decoded from the directory record; None when the
    /// record carried nothing usable (the dashboards then use fallbacks).
    pub data: Option<DashboardData>,
    /// The directory's numeric role column, kept verbatim.
    pub role: u8,
    /// The semantic tag supplied by the caller at login; authoritative for
    /// routing. Not re-derived from `role`.
    pub user_type: UserType,
}

pub struct SessionStore {
    current: RwLock<Option<Session>>,
    mirror: SessionMirror,
}

impl SessionStore {
    pub fn new(mirror: SessionMirror) -> Self {
        Self { current: RwLock::new(None), mirror }
    }

    /// Run once at startup: best-effort parse of the mirrored session.
    /// A corrupt entry is deleted outright and treated as "no session";
    /// nothing is ever partially restored.
    pub fn restore(&self) {
        let raw = match self.mirror.read(KEY_AUTH_USER) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("session restore: no stored session");
                return;
            }
            Err(e) => {
                warn!("session restore: mirror unreadable: {e}");
                return;
            }
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                debug!("session restore: user id={} type={}", session.id, session.user_type);
                *self.current.write() = Some(session);
            }
            Err(e) => {
                warn!("session restore: discarding corrupt stored session: {e}");
                let _ = self.mirror.remove(KEY_AUTH_USER);
                let _ = self.mirror.remove(KEY_USER_TYPE);
            }
        }
    }

    /// Replace the active session and its durable mirror in one step.
    /// The `userType` entry duplicates the role name for older readers of
    /// the mirror; it is written and deleted in lockstep with `authUser`.
    pub fn set_session(&self, session: Option<Session>) {
        match &session {
            Some(s) => {
                match serde_json::to_string(s) {
                    Ok(json) => {
                        if let Err(e) = self.mirror.write(KEY_AUTH_USER, &json) {
                            warn!("session mirror write failed: {e}");
                        }
                        if let Err(e) = self.mirror.write(KEY_USER_TYPE, s.user_type.as_str()) {
                            warn!("session mirror write failed: {e}");
                        }
                    }
                    Err(e) => warn!("session serialize failed: {e}"),
                }
            }
            None => {
                if let Err(e) = self.mirror.remove(KEY_AUTH_USER) {
                    warn!("session mirror remove failed: {e}");
                }
                if let Err(e) = self.mirror.remove(KEY_USER_TYPE) {
                    warn!("session mirror remove failed: {e}");
                }
            }
        }
        *self.current.write() = session;
    }

    pub fn logout(&self) {
        self.set_session(None);
    }

    /// The last value passed to `set_session`, or the restored session.
    pub fn current(&self) -> Option<Session> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }
}
