//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` trait against the Stripe payment
//! intents API. The clinic collects card deposits only; completion is
//! confirmed client-side with the returned `client_secret`, so no webhook
//! handling lives here.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::PaymentConfig;
use crate::ports::{PaymentError, PaymentErrorCode, PaymentIntent, PaymentProvider};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// ISO currency code for all intents.
    currency: String,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,
}

impl StripeConfig {
    /// Create a new Stripe configuration.
    pub fn new(api_key: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            currency: currency.into(),
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Create configuration from the application's payment section.
    pub fn from_config(config: &PaymentConfig) -> Self {
        Self::new(config.stripe_api_key.clone(), config.currency.clone())
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Stripe payment provider adapter.
pub struct StripePaymentAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripePaymentAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

/// Subset of Stripe's payment intent response we consume.
#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: String,
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn create_deposit_intent(
        &self,
        amount_minor: i64,
    ) -> Result<PaymentIntent, PaymentError> {
        let url = format!("{}/v1/payment_intents", self.config.api_base_url);

        let amount = amount_minor.to_string();
        let params = [
            ("amount", amount.as_str()),
            ("currency", self.config.currency.as_str()),
            ("payment_method_types[]", "card"),
        ];

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(PaymentError::new(
                PaymentErrorCode::AuthenticationError,
                "Stripe rejected the API key",
            ));
        }

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(error = %error_text, "Stripe create_payment_intent failed");
            return Err(PaymentError::new(
                PaymentErrorCode::ProviderError,
                format!("Stripe API error: {}", error_text),
            ));
        }

        let intent: StripePaymentIntent = response.json().await.map_err(|e| {
            PaymentError::new(
                PaymentErrorCode::ProviderError,
                format!("Failed to parse Stripe response: {}", e),
            )
        })?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_live_base_url() {
        let config = StripeConfig::new("sk_test_abc", "usd");
        assert_eq!(config.api_base_url, "https://api.stripe.com");
    }

    #[test]
    fn base_url_override_is_applied() {
        let config = StripeConfig::new("sk_test_abc", "usd").with_base_url("http://localhost:9999");
        assert_eq!(config.api_base_url, "http://localhost:9999");
    }

    #[test]
    fn response_subset_deserializes() {
        let intent: StripePaymentIntent = serde_json::from_str(
            r#"{"id":"pi_123","client_secret":"pi_123_secret_x","object":"payment_intent","amount":9900}"#,
        )
        .unwrap();
        assert_eq!(intent.id, "pi_123");
        assert_eq!(intent.client_secret, "pi_123_secret_x");
    }
}
