//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use payout_types::{GatewayError, PayoutRequest, ResponseEnvelope};

use crate::PayoutService;

/// Application state shared across handlers.
pub struct AppState<P: payout_types::PayoutProvider> {
    pub service: PayoutService<P>,
}

/// Wrapper to implement IntoResponse for GatewayError (orphan rule
/// workaround).
///
/// This is the terminal stage for every failure in the pipeline: it logs
/// the failure and emits the uniform error envelope. No handler formats
/// its own error response.
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            GatewayError::MissingParameters | GatewayError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::NotFound => StatusCode::NOT_FOUND,
            // Mirror the upstream status when it is a representable code.
            GatewayError::Upstream { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(status = status.as_u16(), error = %self.0, "request failed");

        (status, Json(ResponseEnvelope::error(self.0.to_string()))).into_response()
    }
}

/// Accepts a payout request, forwards it upstream, relays the outcome.
#[tracing::instrument(skip(state, body))]
pub async fn payout<P: payout_types::PayoutProvider>(
    State(state): State<Arc<AppState<P>>>,
    body: Result<Json<PayoutRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(|rej| GatewayError::BadRequest(rej.body_text()))?;

    let data = state.service.process_payout(req).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseEnvelope::success(
            "Payout successfully processed",
            data,
        )),
    ))
}

/// Routing fallback: every undeclared path or method lands here.
pub async fn not_found() -> ApiError {
    ApiError(GatewayError::NotFound)
}
