//! HS256 JWT implementation of the token ports.
//!
//! Tokens carry exactly one identity claim (`email`) plus the standard
//! `exp` claim, signed with the process-wide secret held in [`AuthConfig`].
//! The secret is read once at startup and passed in by handle; rotating it
//! invalidates every outstanding token.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, Identity};
use crate::ports::{SessionValidator, TokenIssuer};

/// Claims embedded in an access token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    email: String,
    exp: i64,
}

/// Issues and verifies HS256 bearer tokens.
pub struct JwtTokenService {
    secret: SecretString,
    ttl: Duration,
}

impl JwtTokenService {
    /// Creates a service signing with `secret` and expiring tokens after `ttl`.
    pub fn new(secret: SecretString, ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    /// Creates a service from the loaded auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.access_token_secret.clone(),
            Duration::hours(config.token_ttl_hours),
        )
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue_token(&self, email: &str) -> Result<String, AuthError> {
        let claims = Claims {
            email: email.to_string(),
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| AuthError::Signing(e.to_string()))
    }
}

#[async_trait]
impl SessionValidator for JwtTokenService {
    async fn validate(&self, token: &str) -> Result<Identity, AuthError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "token verification failed");
            AuthError::InvalidAuth
        })?;

        Ok(Identity::new(data.claims.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtTokenService {
        JwtTokenService::new(
            SecretString::new("test-signing-secret".to_string()),
            Duration::days(1),
        )
    }

    #[tokio::test]
    async fn token_round_trip_yields_original_email() {
        let service = service();
        let token = service.issue_token("a@x.com").unwrap();

        let identity = service.validate(&token).await.unwrap();
        assert_eq!(identity.email, "a@x.com");
    }

    #[tokio::test]
    async fn expired_token_is_invalid() {
        let service = JwtTokenService::new(
            SecretString::new("test-signing-secret".to_string()),
            Duration::seconds(-120),
        );
        let token = service.issue_token("a@x.com").unwrap();

        let result = service.validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidAuth)));
    }

    #[tokio::test]
    async fn tampered_token_is_invalid() {
        let service = service();
        let mut token = service.issue_token("a@x.com").unwrap();
        token.push('x');

        assert!(matches!(
            service.validate(&token).await,
            Err(AuthError::InvalidAuth)
        ));
    }

    #[tokio::test]
    async fn rotated_secret_invalidates_outstanding_tokens() {
        let token = service().issue_token("a@x.com").unwrap();

        let rotated = JwtTokenService::new(
            SecretString::new("different-secret".to_string()),
            Duration::days(1),
        );
        assert!(matches!(
            rotated.validate(&token).await,
            Err(AuthError::InvalidAuth)
        ));
    }
}
