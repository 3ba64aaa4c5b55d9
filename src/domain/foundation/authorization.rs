//! Request-level authorization rules.
//!
//! Two independent rules, both evaluated after token verification:
//!
//! - **Owner-match**: operations scoped to a user's own data require the
//!   verified identity's email to equal the requested email.
//! - **Admin**: elevated mutations require the verified identity's user
//!   record to carry the admin role.
//!
//! Both return `Err(Forbidden)` on denial, and callers must treat that as
//! terminal: the guarded read or write must not execute.

use super::{DomainError, Identity};
use crate::domain::user::{Role, User};

/// Owner-match rule: the verified identity must own the requested resource.
///
/// Returns `Forbidden` when the identity's email differs from the email the
/// request is scoped to.
pub fn require_owner(identity: &Identity, email: &str) -> Result<(), DomainError> {
    if identity.owns(email) {
        Ok(())
    } else {
        tracing::warn!(
            identity = %identity.email,
            requested = %email,
            "owner-match rule denied access"
        );
        Err(DomainError::forbidden("Forbidden access"))
    }
}

/// Admin rule: the verified identity's user record must have the admin role.
///
/// `user` is the record looked up for the identity's email; `None` means the
/// identity has no user record at all, which is also a denial.
pub fn require_admin(user: Option<&User>) -> Result<(), DomainError> {
    match user {
        Some(user) if user.role == Role::Admin => Ok(()),
        Some(user) => {
            tracing::warn!(email = %user.email, "admin rule denied access");
            Err(DomainError::forbidden("forbidden access"))
        }
        None => Err(DomainError::forbidden("forbidden access")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, UserId};

    fn user_with_role(role: Role) -> User {
        User {
            id: UserId::new(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn owner_match_grants_same_email() {
        let identity = Identity::new("a@x.com");
        assert!(require_owner(&identity, "a@x.com").is_ok());
    }

    #[test]
    fn owner_match_denies_other_email() {
        let identity = Identity::new("a@x.com");
        let err = require_owner(&identity, "b@x.com").unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[test]
    fn admin_rule_grants_admin() {
        let admin = user_with_role(Role::Admin);
        assert!(require_admin(Some(&admin)).is_ok());
    }

    #[test]
    fn admin_rule_denies_patient() {
        let patient = user_with_role(Role::Patient);
        let err = require_admin(Some(&patient)).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[test]
    fn admin_rule_denies_unknown_identity() {
        assert!(require_admin(None).is_err());
    }
}
