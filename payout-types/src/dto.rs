//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

// ─────────────────────────────────────────────────────────────────────────────
// Inbound request
// ─────────────────────────────────────────────────────────────────────────────

/// Payout request as received from the caller, before validation.
///
/// Every field is optional at the deserialization boundary so that absent
/// and `null` values reach the same validation gate as empty ones, instead
/// of failing inside the JSON extractor with a shape error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayoutRequest {
    pub email: Option<String>,
    #[serde(rename = "valueInUSD")]
    pub value_in_usd: Option<f64>,
    pub currency: Option<String>,
}

impl PayoutRequest {
    /// Presence gate: all three fields must be present and non-empty.
    ///
    /// A zero or non-finite amount counts as missing, as does an empty
    /// string. Any miss rejects the whole request before an upstream call
    /// is attempted.
    pub fn validate(self) -> Result<PayoutOrder, GatewayError> {
        let email = self.email.filter(|e| !e.is_empty());
        let value_in_usd = self.value_in_usd.filter(|v| v.is_finite() && *v != 0.0);
        let currency = self.currency.filter(|c| !c.is_empty());

        match (email, value_in_usd, currency) {
            (Some(email), Some(value_in_usd), Some(currency)) => Ok(PayoutOrder {
                email,
                value_in_usd,
                currency,
            }),
            _ => Err(GatewayError::MissingParameters),
        }
    }
}

/// A validated payout, ready to be submitted upstream.
///
/// Serializes to the provider's wire shape:
/// `{"email": ..., "valueInUSD": ..., "currency": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutOrder {
    pub email: String,
    #[serde(rename = "valueInUSD")]
    pub value_in_usd: f64,
    pub currency: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response envelope
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome discriminant of the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// The only response shape ever returned to callers, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status: EnvelopeStatus,
    pub message: String,
    /// Upstream response body, passed through verbatim. Omitted (not null)
    /// on error responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ResponseEnvelope {
    pub fn success(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: message.into(),
            data: None,
        }
    }
}
