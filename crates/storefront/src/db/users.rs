//! Read-only customer list.

use shutterhive_core::admin::UserRecord;
use shutterhive_core::repository::{RepositoryError, UserRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUsers {
    users: Vec<UserRecord>,
}

impl InMemoryUsers {
    #[must_use]
    pub const fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}

impl UserRepository for InMemoryUsers {
    fn list(&self) -> Result<Vec<UserRecord>, RepositoryError> {
        Ok(self.users.clone())
    }
}
