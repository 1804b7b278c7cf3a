//! Scripted demonstration of the conversion engine.
//!
//! Loads the configured rates file, performs a handful of conversions, and
//! prints the resulting history and the available currencies.
//!
//! Usage: cargo run --bin demo [rates-file]

use cambio_core::converter::ConversionEngine;
use cambio_core::rates::RateTable;
use rust_decimal_macros::dec;

fn main() -> anyhow::Result<()> {
    let rates_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "exchange_rates.csv".to_string());

    println!("=== Currency conversion demo ===\n");

    let engine = ConversionEngine::new(RateTable::load(&rates_file)?);

    for (from, to, amount) in [
        ("USD", "EUR", dec!(100)),
        ("EUR", "GBP", dec!(50)),
        ("JPY", "USD", dec!(10000)),
    ] {
        let record = engine.convert(from, to, amount)?;
        println!(
            "{} {} = {} {} (1 {} = {} {})",
            record.amount,
            record.from_currency,
            record.result,
            record.to_currency,
            record.from_currency,
            record.rate,
            record.to_currency
        );
    }

    println!("\nHistory (most recent first):");
    for (i, op) in engine.history(None).iter().enumerate() {
        println!(
            "  {}. {} | {} {} -> {} {}",
            i + 1,
            op.timestamp.format("%H:%M:%S"),
            op.amount,
            op.from_currency,
            op.result,
            op.to_currency
        );
    }

    println!("\nAvailable currencies: {}", engine.currencies().join(", "));

    Ok(())
}
