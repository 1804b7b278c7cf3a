//! Rate table loading and lookup.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;

use super::error::RateTableError;

/// Immutable currency-to-rate mapping loaded from a CSV source.
///
/// Each rate expresses a currency's value relative to an implicit common
/// base; the table never names the base itself. Codes are stored uppercase
/// and lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    /// Loads a rate table from a CSV file.
    ///
    /// The file must carry a header row with `currency` and `rate` columns.
    /// Column order is irrelevant and extra columns are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RateTableError::Read`] if the file cannot be opened, and
    /// the matching variant for schema or value problems. A single bad row
    /// fails the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RateTableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RateTableError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parses a rate table from any CSV reader.
    ///
    /// # Errors
    ///
    /// Same contract as [`RateTable::load`], minus the file-open step.
    pub fn from_reader(reader: impl Read) -> Result<Self, RateTableError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let currency_col = column_index(&headers, "currency")
            .ok_or(RateTableError::MissingColumn { column: "currency" })?;
        let rate_col =
            column_index(&headers, "rate").ok_or(RateTableError::MissingColumn { column: "rate" })?;

        let mut rates = BTreeMap::new();
        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            // Header occupies line 1, data starts at line 2.
            let line = row + 2;

            let code = record.get(currency_col).unwrap_or("").trim();
            if code.is_empty() {
                return Err(RateTableError::EmptyCurrency { line });
            }
            let code = code.to_uppercase();

            let raw_rate = record.get(rate_col).unwrap_or("").trim();
            let rate: Decimal = raw_rate.parse().map_err(|_| RateTableError::InvalidRate {
                currency: code.clone(),
                value: raw_rate.to_string(),
            })?;
            if rate <= Decimal::ZERO {
                return Err(RateTableError::NonPositiveRate {
                    currency: code,
                    rate,
                });
            }

            rates.insert(code, rate);
        }

        Ok(Self { rates })
    }

    /// Looks up the rate for a currency code (case-insensitive).
    #[must_use]
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(&code.to_uppercase()).copied()
    }

    /// Returns all loaded currency codes in lexicographic order.
    #[must_use]
    pub fn currencies(&self) -> Vec<String> {
        self.rates.keys().cloned().collect()
    }

    /// Number of loaded currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table holds no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Finds the position of a named column in the header row.
fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = "currency,rate\nUSD,1.0\nEUR,0.85\nGBP,0.75\nJPY,110.0\n";

    fn table(csv: &str) -> Result<RateTable, RateTableError> {
        RateTable::from_reader(csv.as_bytes())
    }

    #[test]
    fn test_load_sample_table() {
        let table = table(SAMPLE).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.rate("USD"), Some(dec!(1.0)));
        assert_eq!(table.rate("JPY"), Some(dec!(110.0)));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = table(SAMPLE).unwrap();
        assert_eq!(table.rate("eur"), table.rate("EUR"));
        assert_eq!(table.rate("Gbp"), Some(dec!(0.75)));
    }

    #[test]
    fn test_codes_are_uppercased_on_load() {
        let table = table("currency,rate\nusd,1.0\neur,0.85\n").unwrap();
        assert_eq!(table.currencies(), vec!["EUR", "USD"]);
        assert_eq!(table.rate("USD"), Some(dec!(1.0)));
    }

    #[test]
    fn test_currencies_are_sorted() {
        let table = table("currency,rate\nJPY,110.0\nEUR,0.85\nUSD,1.0\n").unwrap();
        assert_eq!(table.currencies(), vec!["EUR", "JPY", "USD"]);
    }

    #[test]
    fn test_column_order_is_irrelevant() {
        let table = table("rate,currency\n1.0,USD\n0.85,EUR\n").unwrap();
        assert_eq!(table.rate("EUR"), Some(dec!(0.85)));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let table = table("currency,name,rate\nUSD,US Dollar,1.0\n").unwrap();
        assert_eq!(table.rate("USD"), Some(dec!(1.0)));
    }

    #[test]
    fn test_missing_rate_column() {
        let err = table("currency,value\nUSD,1.0\n").unwrap_err();
        assert!(matches!(
            err,
            RateTableError::MissingColumn { column: "rate" }
        ));
    }

    #[test]
    fn test_missing_currency_column() {
        let err = table("code,rate\nUSD,1.0\n").unwrap_err();
        assert!(matches!(
            err,
            RateTableError::MissingColumn { column: "currency" }
        ));
    }

    #[test]
    fn test_unparseable_rate() {
        let err = table("currency,rate\nUSD,not_a_number\n").unwrap_err();
        match err {
            RateTableError::InvalidRate { currency, value } => {
                assert_eq!(currency, "USD");
                assert_eq!(value, "not_a_number");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_rate_is_rejected() {
        let err = table("currency,rate\nUSD,1.0\nEUR,0\n").unwrap_err();
        assert!(matches!(
            err,
            RateTableError::NonPositiveRate { currency, .. } if currency == "EUR"
        ));

        let err = table("currency,rate\nUSD,-1.0\n").unwrap_err();
        assert!(matches!(err, RateTableError::NonPositiveRate { .. }));
    }

    #[test]
    fn test_empty_currency_code_is_rejected() {
        let err = table("currency,rate\nUSD,1.0\n,0.85\n").unwrap_err();
        assert!(matches!(err, RateTableError::EmptyCurrency { line: 3 }));
    }

    #[test]
    fn test_bad_row_fails_whole_load() {
        // The first rows are fine, the last one is not: nothing is exposed.
        assert!(table("currency,rate\nUSD,1.0\nEUR,oops\n").is_err());
    }

    #[test]
    fn test_empty_table_loads() {
        let table = table("currency,rate\n").unwrap();
        assert!(table.is_empty());
        assert!(table.currencies().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = RateTable::load("does_not_exist.csv").unwrap_err();
        assert!(matches!(err, RateTableError::Read { .. }));
    }
}
