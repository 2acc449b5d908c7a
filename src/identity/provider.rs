//! The authentication client: one directory lookup per attempt, every
//! outcome normalized to a session or a short user-facing message.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::session::Session;
use super::user_type::UserType;
use crate::dashboard::DashboardData;
use crate::directory::{DirectoryError, UserDirectory};
use crate::error::{AppError, AppResult};

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, field1: &str, field2: &str, user_type: UserType) -> AppResult<Session>;
}

/// Authenticates against the user directory with a single equality lookup
/// on `(field1, field2, role)`.
pub struct DirectoryAuthProvider {
    directory: Arc<dyn UserDirectory>,
}

impl DirectoryAuthProvider {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl AuthProvider for DirectoryAuthProvider {
    async fn authenticate(&self, field1: &str, field2: &str, user_type: UserType) -> AppResult<Session> {
        let role = user_type.role_index();
        let record = match self.directory.find_user(field1, field2, role).await {
            Ok(Some(record)) => record,
            // No matching row: one generic message, never which field was wrong.
            Ok(None) => {
                debug!("auth.login no match for role={role}");
                return Err(AppError::invalid_credentials());
            }
            Err(DirectoryError::Query(e)) => {
                debug!("auth.login directory query error: {e}");
                return Err(AppError::auth_failed());
            }
            Err(DirectoryError::Transport(e)) => {
                debug!("auth.login transport error: {e}");
                return Err(AppError::network());
            }
        };

        // Tag with the caller's semantic type; the stored role column stays
        // numeric and is carried verbatim.
        let session = Session {
            id: record.id,
            field1: record.field1,
            field2: record.field2,
            data: DashboardData::decode(user_type, &record.data),
            role: record.role,
            user_type,
        };
        info!("auth.login user id={} type={}", session.id, session.user_type);
        Ok(session)
    }
}
