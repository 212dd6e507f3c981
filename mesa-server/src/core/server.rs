//! HTTP server assembly and lifecycle

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::auth::require_auth;
use crate::core::{Config, ServerState};

/// HTTP server wrapper
///
/// Assembles the API router, applies the shared middleware stack, and runs
/// the axum listener until shutdown.
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create a server from an already-initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Build the application router with all API routes and middleware
    pub fn build_router(state: ServerState) -> Router {
        Router::new()
            .merge(api::auth::router())
            .merge(api::tables::router())
            .merge(api::categories::router())
            .merge(api::products::router())
            .merge(api::orders::router())
            .merge(api::invoices::router())
            .merge(api::payments::router())
            .layer(middleware::from_fn_with_state(state.clone(), require_auth))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Run the HTTP server until ctrl-c
    pub async fn run(self) -> Result<(), std::io::Error> {
        let addr = format!("{}:{}", self.config.bind_addr, self.config.http_port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tracing::info!(addr = %addr, "Mesa server listening");

        let router = Self::build_router(self.state);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
