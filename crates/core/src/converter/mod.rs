//! Currency conversion engine and history ledger.
//!
//! This module implements the conversion core:
//! - Input validation against the rate table
//! - Cross-rate derivation and banker's rounding
//! - The append-only in-memory history of completed conversions
//! - Error types for per-call validation failures

pub mod engine;
pub mod error;
pub mod history;
pub mod types;

#[cfg(test)]
mod props;

pub use engine::ConversionEngine;
pub use error::ConvertError;
pub use history::History;
pub use types::ConversionRecord;
