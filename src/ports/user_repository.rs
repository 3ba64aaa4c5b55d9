//! Identity store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, Role, User};

/// Lookups and mutations on the user identity store.
///
/// Creation happens through the registration flow; the only role mutation
/// is the admin promotion, which must be idempotent.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Looks up a user by their unique email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Looks up a user by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Lists every registered user.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Persists a new user with the default role.
    async fn insert(&self, user: NewUser) -> Result<User, DomainError>;

    /// Sets `role` on the user identified by `id`. Idempotent: repeating
    /// the call with the same role is a no-op beyond re-setting the value.
    /// Returns `UserNotFound` when no user has `id`.
    async fn set_role(&self, id: &UserId, role: Role) -> Result<(), DomainError>;
}
