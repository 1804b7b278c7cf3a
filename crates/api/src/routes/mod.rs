//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod convert;
pub mod currencies;
pub mod health;
pub mod history;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(convert::routes())
        .merge(history::routes())
        .merge(currencies::routes())
}
