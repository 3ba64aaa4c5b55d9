//! ListUsersHandler - every registered user.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::user::User;
use crate::ports::UserRepository;

pub struct ListUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self) -> Result<Vec<User>, DomainError> {
        self.users.list().await
    }
}
