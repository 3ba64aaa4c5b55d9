//! Authentication types for the domain layer.
//!
//! These types represent a verified identity extracted from a bearer token.
//! They have no token-library dependencies; the `SessionValidator` port
//! populates them after signature and expiry verification.

use thiserror::Error;

/// Verified identity decoded from a bearer token.
///
/// A token encodes exactly one email claim, so the identity is the email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Email address from the token's claim.
    pub email: String,
}

impl Identity {
    /// Creates an identity from a verified email claim.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Whether this identity owns the resource declared for `email`.
    pub fn owns(&self, email: &str) -> bool {
        self.email == email
    }
}

/// Authentication errors raised during token issuance or verification.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No Authorization header was presented. Maps to an unauthorized outcome.
    #[error("unAuthorized")]
    MissingAuth,

    /// A token was presented but failed signature or expiry verification.
    /// Maps to a forbidden outcome.
    #[error("Forbidden")]
    InvalidAuth,

    /// Token could not be signed (bad key material).
    #[error("Token signing failed: {0}")]
    Signing(String),
}

impl AuthError {
    /// True when the caller should re-authenticate rather than retry.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::MissingAuth | AuthError::InvalidAuth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_owns_matching_email() {
        let identity = Identity::new("a@x.com");
        assert!(identity.owns("a@x.com"));
        assert!(!identity.owns("b@x.com"));
    }

    #[test]
    fn missing_auth_displays_source_message() {
        assert_eq!(format!("{}", AuthError::MissingAuth), "unAuthorized");
    }

    #[test]
    fn invalid_auth_requires_reauthentication() {
        assert!(AuthError::InvalidAuth.requires_reauthentication());
        assert!(!AuthError::Signing("bad key".into()).requires_reauthentication());
    }
}
