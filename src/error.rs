//! Unified application error model.
//! One serializable enum used across the portal core and the HTTP surface,
//! with helper constructors and an HTTP status mapping.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Messages surfaced beneath the credential form. Kept generic on purpose:
/// a failed lookup never reveals which field was wrong.
pub const MSG_INVALID_CREDENTIALS: &str =
    "Invalid credentials. Please check your information and try again.";
pub const MSG_AUTH_FAILED: &str = "Authentication failed. Please try again.";
pub const MSG_NETWORK: &str = "Network error. Please check your connection and try again.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppError {
    UserInput { code: String, message: String },
    InvalidCredentials { code: String, message: String },
    AuthFailed { code: String, message: String },
    Network { code: String, message: String },
    Conflict { code: String, message: String },
    NotFound { code: String, message: String },
    Io { code: String, message: String },
    Internal { code: String, message: String },
}

impl AppError {
    pub fn code_str(&self) -> &str {
        match self {
            AppError::UserInput { code, .. }
            | AppError::InvalidCredentials { code, .. }
            | AppError::AuthFailed { code, .. }
            | AppError::Network { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Io { code, .. }
            | AppError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::UserInput { message, .. }
            | AppError::InvalidCredentials { message, .. }
            | AppError::AuthFailed { message, .. }
            | AppError::Network { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Io { message, .. }
            | AppError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn user<S: Into<String>>(code: S, msg: S) -> Self { AppError::UserInput { code: code.into(), message: msg.into() } }
    pub fn conflict<S: Into<String>>(code: S, msg: S) -> Self { AppError::Conflict { code: code.into(), message: msg.into() } }
    pub fn not_found<S: Into<String>>(code: S, msg: S) -> Self { AppError::NotFound { code: code.into(), message: msg.into() } }
    pub fn io<S: Into<String>>(code: S, msg: S) -> Self { AppError::Io { code: code.into(), message: msg.into() } }
    pub fn internal<S: Into<String>>(code: S, msg: S) -> Self { AppError::Internal { code: code.into(), message: msg.into() } }

    /// The three login outcomes a user can actually see.
    pub fn invalid_credentials() -> Self {
        AppError::InvalidCredentials { code: "invalid_credentials".into(), message: MSG_INVALID_CREDENTIALS.into() }
    }
    pub fn auth_failed() -> Self {
        AppError::AuthFailed { code: "auth_failed".into(), message: MSG_AUTH_FAILED.into() }
    }
    pub fn network() -> Self {
        AppError::Network { code: "network_error".into(), message: MSG_NETWORK.into() }
    }

    /// Map to HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            AppError::UserInput { .. } => 422,
            AppError::InvalidCredentials { .. } => 401,
            AppError::AuthFailed { .. } => 502,
            AppError::Network { .. } => 502,
            AppError::Conflict { .. } => 409,
            AppError::NotFound { .. } => 404,
            AppError::Io { .. } => 503,
            AppError::Internal { .. } => 500,
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal { code: "internal".into(), message: err.to_string() }
    }
}
