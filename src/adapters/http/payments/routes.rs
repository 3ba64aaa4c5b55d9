//! Router for the payment endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::AppState;

use super::handlers::create_payment_intent;

/// Create the payment router.
///
/// # Routes
/// - `POST /create-payment-intent` - mint a deposit client secret
pub fn routes() -> Router<AppState> {
    Router::new().route("/create-payment-intent", post(create_payment_intent))
}
