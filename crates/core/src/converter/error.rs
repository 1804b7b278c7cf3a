//! Conversion error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during a single conversion call.
///
/// These are per-call validation failures: they are surfaced to the caller
/// and never corrupt the history (a failed conversion appends nothing).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A requested currency code is absent from the rate table.
    #[error("Currency '{0}' not found in rate table")]
    UnknownCurrency(String),

    /// The amount to convert is not strictly positive.
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(Decimal),
}

impl ConvertError {
    /// Returns the machine-readable error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency(_) => "CURRENCY_NOT_FOUND",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
        }
    }
}
