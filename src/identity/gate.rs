//! The credential gate: keeps submission disabled until both fields are
//! well-formed for the selected role, and guards the single in-flight
//! authenticate call.

use tracing::debug;

use super::provider::AuthProvider;
use super::session::Session;
use super::user_type::UserType;
use crate::error::AppError;

pub struct CredentialGate {
    user_type: UserType,
    field1: String,
    field2: String,
    reveal_field2: bool,
    loading: bool,
    error: Option<AppError>,
}

impl CredentialGate {
    pub fn new(user_type: UserType) -> Self {
        Self {
            user_type,
            field1: String::new(),
            field2: String::new(),
            reveal_field2: false,
            loading: false,
            error: None,
        }
    }

    /// Switching roles clears both fields and hides the password again.
    /// Any prior error message stays on screen.
    pub fn change_user_type(&mut self, user_type: UserType) {
        self.user_type = user_type;
        self.field1.clear();
        self.field2.clear();
        self.reveal_field2 = false;
    }

    /// Store field1 with the role's as-typed policy applied.
    pub fn set_field1(&mut self, raw: &str) {
        self.field1 = self.user_type.sanitize_field1(raw);
    }

    /// Store field2 with the role's as-typed policy applied.
    pub fn set_field2(&mut self, raw: &str) {
        self.field2 = self.user_type.sanitize_field2(raw);
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal_field2 = !self.reveal_field2;
    }

    /// Pure predicate over the current (field1, field2, role) triple.
    pub fn is_valid(&self) -> bool {
        self.user_type.credentials_valid(&self.field1, &self.field2)
    }

    /// One authenticate call per user click. A submit while invalid or
    /// while a previous call is still in flight does nothing at all:
    /// no request, no error, the control simply stays disabled.
    pub async fn submit(&mut self, provider: &dyn AuthProvider) -> Option<Session> {
        if !self.is_valid() || self.loading {
            debug!("gate.submit ignored: valid={} loading={}", self.is_valid(), self.loading);
            return None;
        }
        self.loading = true;
        self.error = None;
        let outcome = provider.authenticate(&self.field1, &self.field2, self.user_type).await;
        self.loading = false;
        match outcome {
            Ok(session) => Some(session),
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn field1(&self) -> &str {
        &self.field1
    }

    pub fn field2(&self) -> &str {
        &self.field2
    }

    pub fn reveal_field2(&self) -> bool {
        self.reveal_field2
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The last surfaced login failure, if any.
    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn force_loading(&mut self, v: bool) {
        self.loading = v;
    }
}
