//! Error types for the payout gateway.

/// Provider-level errors (outbound adapter failures).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The upstream answered, but not with the one status that means
    /// success.
    #[error("upstream responded with status {status}")]
    Status { status: u16 },

    /// The outbound call itself failed (connect, timeout, body decode).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Gateway-level errors (for HTTP responses).
///
/// Every failure path in the pipeline converges on this taxonomy before it
/// reaches the terminal response mapper.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("{0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    /// Upstream answered with a non-200 status; the status is mirrored to
    /// the caller.
    #[error("Failed to process payout")]
    Upstream { status: u16 },

    #[error("{0}")]
    Internal(String),
}

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Status { status } => GatewayError::Upstream { status },
            ProviderError::Transport(msg) => GatewayError::Internal(msg),
        }
    }
}
