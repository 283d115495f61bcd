//! Payout Application Service
//!
//! Orchestrates the validate-then-forward flow through the provider port.
//! Contains NO transport logic - pure orchestration.

use payout_types::{GatewayError, PayoutProvider, PayoutRequest};

/// Application service for payout processing.
///
/// Generic over `P: PayoutProvider` - the adapter is injected at compile
/// time, which keeps the service testable with an in-memory provider.
pub struct PayoutService<P: PayoutProvider> {
    provider: P,
}

impl<P: PayoutProvider> PayoutService<P> {
    /// Creates a new payout service with the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Validates the request and forwards it upstream.
    ///
    /// Exactly one outbound call per valid request, zero for an invalid
    /// one. There is no retry and no dedup: an identical request sent twice
    /// produces two independent upstream payout attempts.
    pub async fn process_payout(
        &self,
        req: PayoutRequest,
    ) -> Result<serde_json::Value, GatewayError> {
        let order = req.validate()?;

        self.provider
            .create_payout(&order)
            .await
            .map_err(Into::into)
    }
}
