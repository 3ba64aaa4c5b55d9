//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration (bearer token signing).
///
/// The signing secret is process-wide state read once at startup. Rotating
/// it invalidates every previously issued token; no revocation list is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify access tokens
    pub access_token_secret: SecretString,

    /// Token lifetime in hours
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.access_token_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("ACCESS_TOKEN_SECRET"));
        }
        if self.token_ttl_hours <= 0 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

fn default_token_ttl_hours() -> i64 {
    24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_empty_secret() {
        let config = AuthConfig {
            access_token_secret: SecretString::new(String::new()),
            token_ttl_hours: 24,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_nonpositive_ttl() {
        let config = AuthConfig {
            access_token_secret: SecretString::new("secret".to_string()),
            token_ttl_hours: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTokenTtl)
        ));
    }

    #[test]
    fn validation_accepts_valid_config() {
        let config = AuthConfig {
            access_token_secret: SecretString::new("secret".to_string()),
            token_ttl_hours: 24,
        };
        assert!(config.validate().is_ok());
    }
}
