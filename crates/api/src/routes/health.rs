//! Service banner and health check endpoints.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Value, json};

use crate::AppState;

/// GET `/` - Service banner with the endpoint map.
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Currency Converter API is running!",
        "endpoints": {
            "/convert": "Convert currency (GET /convert?from_currency=USD&to_currency=EUR&amount=100)",
            "/history": "Get conversion history (GET /history?limit=10)",
            "/currencies": "Get available currencies (GET /currencies)",
            "/health": "Service health check",
        }
    }))
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates the banner and health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
