//! Conversion record value object.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single completed currency conversion.
///
/// Records are immutable once created: the engine appends them to its
/// history and never touches them again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// When the conversion was performed.
    pub timestamp: DateTime<Utc>,
    /// Source currency code (uppercase, present in the rate table).
    pub from_currency: String,
    /// Target currency code (uppercase, present in the rate table).
    pub to_currency: String,
    /// Input amount in `from_currency` units.
    pub amount: Decimal,
    /// Converted amount in `to_currency` units, rounded to 2 decimal places.
    pub result: Decimal,
    /// Effective cross-rate (`to_currency` per `from_currency`), rounded to
    /// 6 decimal places.
    pub rate: Decimal,
}
