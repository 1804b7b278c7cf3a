//! Exchange-rate table loading and lookup.
//!
//! Rates are loaded once at startup from a CSV source and are immutable for
//! the rest of the process lifetime. Loading is all-or-nothing: no partial
//! table is ever exposed on failure.

pub mod error;
pub mod table;

pub use error::RateTableError;
pub use table::RateTable;
