//! Conversion history route.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{AppState, envelope};

/// Creates the history routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/history", get(get_history))
}

/// Query parameters for the history listing.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Maximum number of records to return, most recent first. Absent or
    /// zero means no truncation.
    pub limit: Option<usize>,
}

/// GET `/history` - List past conversions, most recent first.
///
/// `total_count` reports the full ledger size regardless of `limit`.
async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<Value> {
    let (operations, total_count) = state.engine.history_with_total(query.limit);
    envelope::success(json!({
        "operations": operations,
        "total_count": total_count,
    }))
}
