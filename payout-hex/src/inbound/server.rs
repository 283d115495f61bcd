//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, routing::post};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use payout_types::PayoutProvider;

use super::handlers::{self, AppState};
use crate::PayoutService;

/// HTTP Server for the Payout Gateway.
pub struct HttpServer<P: PayoutProvider> {
    state: Arc<AppState<P>>,
}

impl<P: PayoutProvider> HttpServer<P> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: PayoutService<P>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    ///
    /// Both unmatched paths and wrong methods on `/payout` fall through to
    /// the 404 handler, so the whole surface outside the one route answers
    /// with the same `Not found` envelope.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/payout", post(handlers::payout::<P>))
            .fallback(handlers::not_found)
            .method_not_allowed_fallback(handlers::not_found)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
