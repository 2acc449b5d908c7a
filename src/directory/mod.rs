//! The hosted user directory: the single external collaborator.
//! One capability: a point lookup over the `users` collection by
//! `(field1, field2, role)` equality. "No matching row" is an ordinary
//! outcome (`Ok(None)`), distinct from query and transport failures.

mod http;
mod memory;

pub use http::HttpDirectory;
pub use memory::MemoryDirectory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the `users` collection, as the directory stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub field1: String,
    pub field2: String,
    /// Opaque role-shaped payload; decoded downstream, never interpreted
    /// by the directory layer.
    #[serde(default)]
    pub data: serde_json::Value,
    pub role: u8,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The store answered, but with a failure other than "no rows".
    #[error("directory query failed: {0}")]
    Query(String),
    /// The store could not be reached at all.
    #[error("directory unreachable: {0}")]
    Transport(String),
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Point lookup for the unique record matching all three values.
    /// Returns `Ok(None)` when no single record matches.
    async fn find_user(
        &self,
        field1: &str,
        field2: &str,
        role: u8,
    ) -> Result<Option<UserRecord>, DirectoryError>;
}
