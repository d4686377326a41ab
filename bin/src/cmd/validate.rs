//! The `validate` subcommand: pre-flight a single instrument's data.

use anyhow::Result;
use chrono::{Duration, Utc};
use ronda_screen::{DataValidator, FETCH_BUFFER_DAYS, ScreenerConfig};
use ronda_traits::PriceProvider;
use ronda_yahoo::YahooProvider;

pub(crate) async fn run(symbol: &str, config_path: Option<&str>) -> Result<()> {
    let config = ScreenerConfig::load(config_path)?;
    let lookback = config.default_lookback;

    let provider = YahooProvider::new();
    let validator = DataValidator::new(config.min_data_points);
    let ticker = validator.sanitize_ticker(symbol);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Data Validation                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Symbol: {}", ticker);

    let end = Utc::now().date_naive();
    let start = end - Duration::days(lookback as i64 + FETCH_BUFFER_DAYS);
    println!("Window: {} to {}", start, end);
    println!();

    let Some(series) = provider.get_series(&ticker, start, end).await else {
        println!("Result: FAIL");
        println!("Reason: no data could be fetched for {}", ticker);
        println!();
        return Ok(());
    };

    println!("Observations: {}", series.len());
    println!(
        "Missing:      {} ({:.1}%)",
        series.missing_count(),
        series.missing_fraction() * 100.0
    );

    let anomalies = validator.detect_anomalies(&series);
    if anomalies.is_empty() {
        println!("Anomalies:    none");
    } else {
        println!("Anomalies:    {}", anomalies.join(", "));
    }
    println!();

    let verdict = validator.validate(&series, &ticker);
    if verdict.passed() {
        println!("Result: PASS");
    } else {
        println!("Result: FAIL");
        println!("Reason: {}", verdict.reason());
    }
    println!();

    Ok(())
}
