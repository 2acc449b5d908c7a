use async_trait::async_trait;
use parking_lot::RwLock;

use super::{DirectoryError, UserDirectory, UserRecord};

/// In-process directory used for demo seeding and as the test double.
#[derive(Default)]
pub struct MemoryDirectory {
    users: RwLock<Vec<UserRecord>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: UserRecord) {
        self.users.write().push(record);
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn find_user(
        &self,
        field1: &str,
        field2: &str,
        role: u8,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        let users = self.users.read();
        let mut matches = users
            .iter()
            .filter(|u| u.field1 == field1 && u.field2 == field2 && u.role == role);
        let first = matches.next().cloned();
        // The hosted store answers a single-object lookup; more than one
        // matching row is indistinguishable from none for the caller.
        if matches.next().is_some() {
            return Ok(None);
        }
        Ok(first)
    }
}
