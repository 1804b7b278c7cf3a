//! Currency conversion route.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use cambio_core::converter::ConvertError;

use crate::{AppState, envelope};

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/convert", get(convert))
}

/// Query parameters for a conversion.
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// Amount to convert, in source currency units.
    pub amount: Decimal,
}

/// GET `/convert` - Convert an amount between two currencies.
///
/// Validation failures come back as HTTP 200 with `success: false` and a
/// machine-readable error code; unknown-currency failures list the available
/// currencies in `details`.
async fn convert(State(state): State<AppState>, Query(query): Query<ConvertQuery>) -> Json<Value> {
    match state
        .engine
        .convert(&query.from_currency, &query.to_currency, query.amount)
    {
        Ok(record) => envelope::success(record),
        Err(e) => {
            warn!(error = %e, "Conversion rejected");
            let details = match &e {
                ConvertError::UnknownCurrency(_) => {
                    format!(
                        "Available currencies: {}",
                        state.engine.currencies().join(", ")
                    )
                }
                ConvertError::InvalidAmount(_) => "Amount must be a positive number".to_string(),
            };
            envelope::failure(e.error_code(), e.to_string(), details)
        }
    }
}
