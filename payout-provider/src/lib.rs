//! # Payout Provider
//!
//! Outbound HTTP adapter: implements the `PayoutProvider` port against the
//! third-party payout API (`POST {base_url}/v2/payouts`, bearer auth).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use payout_types::{PayoutOrder, PayoutProvider, ProviderError};

/// HTTP implementation of the payout provider port.
pub struct HttpPayoutProvider {
    base_url: String,
    api_key: String,
    http: Client,
}

impl HttpPayoutProvider {
    /// Creates a new provider adapter.
    ///
    /// The timeout bounds the whole outbound call; a hung upstream surfaces
    /// as a transport error instead of hanging the inbound request.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http,
        })
    }

    fn payouts_url(&self) -> String {
        format!("{}/v2/payouts", self.base_url)
    }
}

#[async_trait]
impl PayoutProvider for HttpPayoutProvider {
    #[tracing::instrument(skip(self), fields(email = %order.email, currency = %order.currency))]
    async fn create_payout(
        &self,
        order: &PayoutOrder,
    ) -> Result<serde_json::Value, ProviderError> {
        let resp = self
            .http
            .post(self.payouts_url())
            .bearer_auth(&self.api_key)
            .json(order)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        // Strict equality on 200: this upstream documents 200 as the only
        // success status, so 201/204/3xx are all treated as failures.
        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "upstream rejected payout");
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        resp.json()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))
    }
}
