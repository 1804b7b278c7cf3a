//! Conversion engine: validation, computation, history append.

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::rates::RateTable;

use super::error::ConvertError;
use super::history::History;
use super::types::ConversionRecord;

/// Decimal places kept in conversion results.
const RESULT_DECIMALS: u32 = 2;
/// Decimal places kept in effective cross-rates.
const RATE_DECIMALS: u32 = 6;

/// Validates and executes currency conversions against an immutable rate
/// table, recording every successful conversion in an owned history ledger.
///
/// One engine instance exists per process (or per test). Sharing it across
/// request handlers is safe: the rate table is read-only and the history
/// synchronizes its own access.
#[derive(Debug)]
pub struct ConversionEngine {
    rates: RateTable,
    history: History,
}

impl ConversionEngine {
    /// Creates an engine over a fully loaded rate table.
    #[must_use]
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates,
            history: History::new(),
        }
    }

    /// Converts `amount` from one currency to another.
    ///
    /// Both codes are upper-cased first, so input case never affects the
    /// outcome. Validation short-circuits in order: unknown source currency,
    /// unknown target currency, non-positive amount.
    ///
    /// The result is `(amount / rate[from]) * rate[to]` rounded to 2 decimal
    /// places, and the effective cross-rate is `rate[to] / rate[from]`
    /// rounded to 6 decimal places, both with banker's rounding
    /// (`MidpointNearestEven`). Same-currency conversion is not special-cased:
    /// it yields `result == amount` and `rate == 1` from the formula alone.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] on validation failure; nothing is appended
    /// to the history in that case.
    pub fn convert(
        &self,
        from_currency: &str,
        to_currency: &str,
        amount: Decimal,
    ) -> Result<ConversionRecord, ConvertError> {
        let from_currency = from_currency.to_uppercase();
        let to_currency = to_currency.to_uppercase();

        let from_rate = self
            .rates
            .rate(&from_currency)
            .ok_or_else(|| ConvertError::UnknownCurrency(from_currency.clone()))?;
        let to_rate = self
            .rates
            .rate(&to_currency)
            .ok_or_else(|| ConvertError::UnknownCurrency(to_currency.clone()))?;

        if amount <= Decimal::ZERO {
            return Err(ConvertError::InvalidAmount(amount));
        }

        let result = ((amount / from_rate) * to_rate)
            .round_dp_with_strategy(RESULT_DECIMALS, RoundingStrategy::MidpointNearestEven);
        let rate = (to_rate / from_rate)
            .round_dp_with_strategy(RATE_DECIMALS, RoundingStrategy::MidpointNearestEven);

        let record = ConversionRecord {
            timestamp: Utc::now(),
            from_currency,
            to_currency,
            amount,
            result,
            rate,
        };
        self.history.append(record.clone());

        Ok(record)
    }

    /// Returns the conversion history, most recent first.
    ///
    /// `Some(n)` with `n > 0` keeps only the `n` most recent conversions;
    /// `None` or `Some(0)` returns the full history. The returned records
    /// are a snapshot; the ledger itself is untouched.
    #[must_use]
    pub fn history(&self, limit: Option<usize>) -> Vec<ConversionRecord> {
        self.history.snapshot(limit)
    }

    /// Like [`ConversionEngine::history`], but also returns the total ledger
    /// size observed atomically with the snapshot.
    #[must_use]
    pub fn history_with_total(&self, limit: Option<usize>) -> (Vec<ConversionRecord>, usize) {
        self.history.snapshot_with_total(limit)
    }

    /// Total number of conversions performed by this engine.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns the available currency codes in deterministic order.
    #[must_use]
    pub fn currencies(&self) -> Vec<String> {
        self.rates.currencies()
    }

    /// The rate table this engine converts against.
    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}
