//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Success/error response envelopes
//! - Shared application state

pub mod envelope;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use cambio_core::converter::ConversionEngine;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Conversion engine holding the rate table and the history ledger.
    pub engine: Arc<ConversionEngine>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
