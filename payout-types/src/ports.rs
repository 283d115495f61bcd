//! Port traits that outbound adapters must implement.

use async_trait::async_trait;

use crate::dto::PayoutOrder;
use crate::error::ProviderError;

/// Outbound port for the third-party payout provider.
///
/// One call per inbound request; the gateway never retries. The provider's
/// response body is opaque to the gateway and passed through verbatim.
#[async_trait]
pub trait PayoutProvider: Send + Sync + 'static {
    /// Submits a single payout and returns the provider's response body.
    async fn create_payout(
        &self,
        order: &PayoutOrder,
    ) -> Result<serde_json::Value, ProviderError>;
}
