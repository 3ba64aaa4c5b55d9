//! CreateDepositIntentHandler - mint a client secret for a deposit.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{PaymentIntent, PaymentProvider};

/// Converts a decimal price to the provider's minor units (cents).
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

#[derive(Debug, Clone)]
pub struct CreateDepositIntentCommand {
    /// Decimal price of the treatment being paid for.
    pub price: f64,
}

pub struct CreateDepositIntentHandler {
    payments: Arc<dyn PaymentProvider>,
}

impl CreateDepositIntentHandler {
    pub fn new(payments: Arc<dyn PaymentProvider>) -> Self {
        Self { payments }
    }

    pub async fn handle(
        &self,
        cmd: CreateDepositIntentCommand,
    ) -> Result<PaymentIntent, DomainError> {
        if !cmd.price.is_finite() || cmd.price < 0.0 {
            return Err(DomainError::validation("price must be a non-negative number"));
        }

        let amount_minor = to_minor_units(cmd.price);
        let intent = self.payments.create_deposit_intent(amount_minor).await?;
        tracing::info!(intent_id = %intent.id, amount_minor, "payment intent created");
        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::PaymentError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingProvider {
        amounts: Mutex<Vec<i64>>,
    }

    #[async_trait]
    impl PaymentProvider for RecordingProvider {
        async fn create_deposit_intent(
            &self,
            amount_minor: i64,
        ) -> Result<PaymentIntent, PaymentError> {
            self.amounts.lock().unwrap().push(amount_minor);
            Ok(PaymentIntent {
                id: "pi_test".to_string(),
                client_secret: "pi_test_secret".to_string(),
            })
        }
    }

    #[test]
    fn minor_units_are_rounded_cents() {
        assert_eq!(to_minor_units(99.0), 9900);
        assert_eq!(to_minor_units(19.99), 1999);
        assert_eq!(to_minor_units(10.005), 1001);
        assert_eq!(to_minor_units(0.0), 0);
    }

    #[tokio::test]
    async fn provider_receives_the_converted_amount() {
        let provider = Arc::new(RecordingProvider {
            amounts: Mutex::new(Vec::new()),
        });
        let handler = CreateDepositIntentHandler::new(provider.clone());

        let intent = handler
            .handle(CreateDepositIntentCommand { price: 19.99 })
            .await
            .unwrap();

        assert_eq!(intent.client_secret, "pi_test_secret");
        assert_eq!(provider.amounts.lock().unwrap().as_slice(), &[1999]);
    }

    #[tokio::test]
    async fn negative_price_is_rejected_before_the_provider_call() {
        let provider = Arc::new(RecordingProvider {
            amounts: Mutex::new(Vec::new()),
        });
        let handler = CreateDepositIntentHandler::new(provider.clone());

        let err = handler
            .handle(CreateDepositIntentCommand { price: -5.0 })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(provider.amounts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn provider_failure_surfaces_as_external_service_error() {
        struct FailingProvider;

        #[async_trait]
        impl PaymentProvider for FailingProvider {
            async fn create_deposit_intent(
                &self,
                _amount_minor: i64,
            ) -> Result<PaymentIntent, PaymentError> {
                Err(PaymentError::provider("card network unavailable"))
            }
        }

        let handler = CreateDepositIntentHandler::new(Arc::new(FailingProvider));
        let err = handler
            .handle(CreateDepositIntentCommand { price: 10.0 })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
    }
}
