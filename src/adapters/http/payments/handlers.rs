//! HTTP handlers for payments.

use axum::extract::State;
use axum::Json;

use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::payment::{
    CreateDepositIntentCommand, CreateDepositIntentHandler,
};

use super::dto::{CreatePaymentIntentRequest, PaymentIntentResponse};

/// `POST /create-payment-intent` - mint a client secret for a deposit.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(request): Json<CreatePaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, ApiError> {
    let handler = CreateDepositIntentHandler::new(state.payments.clone());
    let intent = handler
        .handle(CreateDepositIntentCommand {
            price: request.price,
        })
        .await?;

    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}
