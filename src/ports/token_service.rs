//! Token lifecycle ports.
//!
//! A token moves through {absent} -> issuance -> {valid, unexpired} ->
//! {expired} | {tampered}. Issuance and verification are separate seams so
//! the HTTP middleware only depends on validation.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Identity};

/// Mints signed bearer tokens embedding a single email claim.
pub trait TokenIssuer: Send + Sync {
    /// Signs a token for `email` with the configured expiry.
    ///
    /// The caller is responsible for checking that the email belongs to a
    /// known user before issuing.
    fn issue_token(&self, email: &str) -> Result<String, AuthError>;
}

/// Verifies bearer tokens and extracts the identity claim.
///
/// # Contract
///
/// Implementations must validate the signature against the process-wide
/// signing secret and the expiry claim, returning `AuthError::InvalidAuth`
/// for any token that fails either check.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validates a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<Identity, AuthError>;
}
