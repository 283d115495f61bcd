//! PayoutService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use payout_types::{GatewayError, PayoutOrder, PayoutProvider, PayoutRequest, ProviderError};

    use crate::PayoutService;

    /// Canned outcome the mock returns on every call.
    pub enum Outcome {
        Ok(serde_json::Value),
        Status(u16),
        Transport(String),
    }

    /// In-memory provider double that records every order it receives.
    pub struct MockProvider {
        outcome: Outcome,
        orders: Mutex<Vec<PayoutOrder>>,
    }

    impl MockProvider {
        pub fn returning(outcome: Outcome) -> Self {
            Self {
                outcome,
                orders: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.orders.lock().unwrap().len()
        }

        pub fn orders(&self) -> Vec<PayoutOrder> {
            self.orders.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PayoutProvider for MockProvider {
        async fn create_payout(
            &self,
            order: &PayoutOrder,
        ) -> Result<serde_json::Value, ProviderError> {
            self.orders.lock().unwrap().push(order.clone());
            match &self.outcome {
                Outcome::Ok(value) => Ok(value.clone()),
                Outcome::Status(status) => Err(ProviderError::Status { status: *status }),
                Outcome::Transport(msg) => Err(ProviderError::Transport(msg.clone())),
            }
        }
    }

    fn valid_request() -> PayoutRequest {
        PayoutRequest {
            email: Some("a@b.com".into()),
            value_in_usd: Some(10.0),
            currency: Some("USD".into()),
        }
    }

    #[tokio::test]
    async fn valid_request_passes_upstream_body_through() {
        let body = json!({"paymentLink": "https://pay/xyz"});
        let service = PayoutService::new(MockProvider::returning(Outcome::Ok(body.clone())));

        let data = service.process_payout(valid_request()).await.unwrap();

        assert_eq!(data, body);
        assert_eq!(service.provider().call_count(), 1);
        assert_eq!(service.provider().orders()[0].email, "a@b.com");
    }

    #[tokio::test]
    async fn missing_field_fails_before_any_upstream_call() {
        let service = PayoutService::new(MockProvider::returning(Outcome::Ok(json!({}))));

        let req = PayoutRequest {
            email: Some("a@b.com".into()),
            value_in_usd: None,
            currency: None,
        };
        let err = service.process_payout(req).await.unwrap_err();

        assert!(matches!(err, GatewayError::MissingParameters));
        assert_eq!(service.provider().call_count(), 0);
    }

    #[tokio::test]
    async fn upstream_status_is_mirrored() {
        let service = PayoutService::new(MockProvider::returning(Outcome::Status(502)));

        let err = service.process_payout(valid_request()).await.unwrap_err();

        assert!(matches!(err, GatewayError::Upstream { status: 502 }));
    }

    #[tokio::test]
    async fn transport_failure_becomes_internal_error() {
        let service = PayoutService::new(MockProvider::returning(Outcome::Transport(
            "connection refused".into(),
        )));

        let err = service.process_payout(valid_request()).await.unwrap_err();

        assert!(matches!(err, GatewayError::Internal(_)));
    }

    #[tokio::test]
    async fn identical_requests_are_not_deduplicated() {
        let service = PayoutService::new(MockProvider::returning(Outcome::Ok(json!({}))));

        service.process_payout(valid_request()).await.unwrap();
        service.process_payout(valid_request()).await.unwrap();

        // No idempotency key on the wire, so each request is its own
        // upstream payout attempt.
        assert_eq!(service.provider().call_count(), 2);
        assert_eq!(
            service.provider().orders()[0],
            service.provider().orders()[1]
        );
    }
}
