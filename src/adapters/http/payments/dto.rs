//! HTTP DTOs for the payment endpoints.

use serde::{Deserialize, Serialize};

/// Request body for minting a deposit payment intent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Decimal price of the treatment being paid for.
    pub price: f64,
}

/// Response carrying the provider's client secret.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}
