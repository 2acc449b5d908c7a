//! Central identity handling for the portal: credential gate, directory
//! authentication, the single active session and its durable mirror, and
//! role routing. Keep the public surface thin and split implementation
//! across sub-modules.

mod gate;
mod mirror;
mod provider;
mod router;
mod session;
mod user_type;

pub use gate::CredentialGate;
pub use mirror::{SessionMirror, KEY_AUTH_USER, KEY_USER_TYPE};
pub use provider::{AuthProvider, DirectoryAuthProvider};
pub use router::{route, select_dashboard, sign_out, DashboardView, Route};
pub use session::{Session, SessionStore};
pub use user_type::{FieldKind, FieldSpec, UserType};

#[cfg(test)]
mod tests;
