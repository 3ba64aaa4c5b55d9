//! CheckAdminHandler - is this email an admin?

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct CheckAdminQuery {
    pub email: String,
}

/// Projection used by the client to decide which dashboard to render.
/// An unknown email is simply not an admin.
pub struct CheckAdminHandler {
    users: Arc<dyn UserRepository>,
}

impl CheckAdminHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: CheckAdminQuery) -> Result<bool, DomainError> {
        let user = self.users.find_by_email(&query.email).await?;
        Ok(user.map(|u| u.is_admin()).unwrap_or(false))
    }
}
