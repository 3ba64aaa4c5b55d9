//! PromoteToAdminHandler - admin-gated role promotion.

use std::sync::Arc;

use crate::domain::foundation::{require_admin, DomainError, Identity, UserId};
use crate::domain::user::Role;
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct PromoteToAdminCommand {
    /// Id of the user being promoted.
    pub target: UserId,
}

/// Promotes a user to admin. Only an existing admin may do this, and a
/// denial is terminal: the role write must never run after a Forbidden.
pub struct PromoteToAdminHandler {
    users: Arc<dyn UserRepository>,
}

impl PromoteToAdminHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        identity: &Identity,
        cmd: PromoteToAdminCommand,
    ) -> Result<(), DomainError> {
        let caller = self.users.find_by_email(&identity.email).await?;
        require_admin(caller.as_ref())?;

        self.users.set_role(&cmd.target, Role::Admin).await?;
        tracing::info!(target = %cmd.target, by = %identity.email, "user promoted to admin");
        Ok(())
    }
}
