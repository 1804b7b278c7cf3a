//! Rate table error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while loading a rate table.
///
/// Every variant is fatal to construction: the engine is never built on top
/// of a partially loaded table.
#[derive(Debug, Error)]
pub enum RateTableError {
    /// Rates file missing or unreadable.
    #[error("rates file '{path}' could not be read")]
    Read {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV structure (e.g. a row with the wrong field count).
    #[error("rates file is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("rates file must contain a '{column}' column")]
    MissingColumn {
        /// Name of the missing column.
        column: &'static str,
    },

    /// A row carries an empty currency code.
    #[error("row at line {line} has an empty currency code")]
    EmptyCurrency {
        /// 1-based line number in the source file.
        line: usize,
    },

    /// A rate field is not a parseable decimal number.
    #[error("invalid rate '{value}' for currency '{currency}'")]
    InvalidRate {
        /// Currency code of the offending row.
        currency: String,
        /// Raw rate field content.
        value: String,
    },

    /// A rate is zero or negative.
    #[error("rate for currency '{currency}' must be positive, got {rate}")]
    NonPositiveRate {
        /// Currency code of the offending row.
        currency: String,
        /// The non-positive rate.
        rate: Decimal,
    },
}
