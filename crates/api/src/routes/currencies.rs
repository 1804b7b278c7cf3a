//! Currency listing route.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::{AppState, envelope};

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/currencies", get(list_currencies))
}

/// GET `/currencies` - List all available currency codes.
async fn list_currencies(State(state): State<AppState>) -> Json<Value> {
    let currencies = state.engine.currencies();
    envelope::success(json!({
        "total_currencies": currencies.len(),
        "currencies": currencies,
    }))
}
