//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Stripe)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Stripe secret API key
    pub stripe_api_key: String,

    /// Currency for deposit intents (the portal is single-currency)
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl PaymentConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_test_")
    }

    /// Check if using Stripe live mode
    pub fn is_live_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_live_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_API_KEY"));
        }
        // Verify key prefix for safety
        if !self.stripe_api_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }
        if self.currency.len() != 3 {
            return Err(ValidationError::InvalidCurrency);
        }
        Ok(())
    }
}

fn default_currency() -> String {
    "usd".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> PaymentConfig {
        PaymentConfig {
            stripe_api_key: "sk_test_xxx".to_string(),
            currency: default_currency(),
        }
    }

    #[test]
    fn is_test_mode_detects_prefix() {
        let config = valid_config();
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());
    }

    #[test]
    fn validation_rejects_missing_key() {
        let config = PaymentConfig {
            stripe_api_key: String::new(),
            currency: default_currency(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_wrong_prefix() {
        let config = PaymentConfig {
            stripe_api_key: "pk_test_xxx".to_string(),
            currency: default_currency(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidStripeKey)
        ));
    }

    #[test]
    fn validation_rejects_bad_currency() {
        let config = PaymentConfig {
            currency: "dollars".to_string(),
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCurrency)
        ));
    }
}
