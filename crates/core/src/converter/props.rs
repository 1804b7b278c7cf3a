//! Property-based tests for the conversion engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::rates::RateTable;

use super::engine::ConversionEngine;

const SAMPLE: &str = "currency,rate\nUSD,1.0\nEUR,0.85\nGBP,0.75\nJPY,110.0\n";

fn engine() -> ConversionEngine {
    let table = RateTable::from_reader(SAMPLE.as_bytes()).unwrap();
    ConversionEngine::new(table)
}

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick a loaded currency code.
fn currency() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["USD", "EUR", "GBP", "JPY"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* valid pair and amount, converting twice with identical
    /// arguments yields identical result and rate (timestamp excepted).
    #[test]
    fn prop_convert_is_deterministic(
        amount in positive_amount(),
        from in currency(),
        to in currency(),
    ) {
        let engine = engine();
        let first = engine.convert(from, to, amount).unwrap();
        let second = engine.convert(from, to, amount).unwrap();
        prop_assert_eq!(first.result, second.result);
        prop_assert_eq!(first.rate, second.rate);
    }

    /// *For any* valid pair and amount, the result carries at most 2 decimal
    /// places and the rate at most 6.
    #[test]
    fn prop_result_and_rate_are_rounded(
        amount in positive_amount(),
        from in currency(),
        to in currency(),
    ) {
        let record = engine().convert(from, to, amount).unwrap();

        let scaled_result = record.result * Decimal::from(100);
        prop_assert_eq!(scaled_result, scaled_result.round());

        let scaled_rate = record.rate * Decimal::from(1_000_000);
        prop_assert_eq!(scaled_rate, scaled_rate.round());
    }

    /// *For any* loaded currency and amount, same-currency conversion
    /// returns the amount itself (up to 2-decimal rounding) at rate 1.
    #[test]
    fn prop_identity_conversion(
        amount in positive_amount(),
        code in currency(),
    ) {
        let record = engine().convert(code, code, amount).unwrap();
        prop_assert_eq!(record.result, amount.round_dp(2));
        prop_assert_eq!(record.rate, Decimal::ONE);
    }

    /// *For any* valid pair and positive amount, the result is never
    /// negative (it may round down to zero for tiny amounts).
    #[test]
    fn prop_result_is_non_negative(
        amount in positive_amount(),
        from in currency(),
        to in currency(),
    ) {
        let record = engine().convert(from, to, amount).unwrap();
        prop_assert!(record.result >= Decimal::ZERO);
    }

    /// *For any* sequence of conversions, the history grows by exactly one
    /// record per successful call, most recent first.
    #[test]
    fn prop_history_tracks_every_conversion(
        amounts in prop::collection::vec(positive_amount(), 1..20),
    ) {
        let engine = engine();
        for amount in &amounts {
            engine.convert("USD", "EUR", *amount).unwrap();
        }
        let history = engine.history(None);
        prop_assert_eq!(history.len(), amounts.len());
        // Most recent first: the head of the snapshot is the last input.
        prop_assert_eq!(history[0].amount, *amounts.last().unwrap());
    }
}
