//! RegisterUserHandler - persist a newly signed-up user.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub candidate: NewUser,
}

/// Stores the user record created by the sign-up flow. Credentials live
/// with the external identity provider; only the profile lands here.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<User, DomainError> {
        if cmd.candidate.email.trim().is_empty() {
            return Err(DomainError::validation("email must not be empty"));
        }
        let user = self.users.insert(cmd.candidate).await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::user::Role;

    #[tokio::test]
    async fn registered_user_starts_as_patient() {
        let handler = RegisterUserHandler::new(Arc::new(InMemoryUserRepository::new()));
        let user = handler
            .handle(RegisterUserCommand {
                candidate: NewUser {
                    name: "A".to_string(),
                    email: "a@x.com".to_string(),
                },
            })
            .await
            .unwrap();
        assert_eq!(user.role, Role::Patient);
    }

    #[tokio::test]
    async fn empty_email_is_rejected() {
        let handler = RegisterUserHandler::new(Arc::new(InMemoryUserRepository::new()));
        let err = handler
            .handle(RegisterUserCommand {
                candidate: NewUser {
                    name: "A".to_string(),
                    email: "  ".to_string(),
                },
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
