//! The `metrics` subcommand: full metric detail for one instrument.

use anyhow::Result;
use ronda_screen::{Screener, ScreenerConfig};
use ronda_traits::metric::MetricValue;
use ronda_yahoo::YahooProvider;

pub(crate) async fn run(
    symbol: &str,
    benchmark: &str,
    lookback: Option<usize>,
    config_path: Option<&str>,
) -> Result<()> {
    let config = ScreenerConfig::load(config_path)?;
    let benchmark_symbol = config.resolve_benchmark(benchmark);
    let lookback = lookback.unwrap_or(config.default_lookback);

    let screener = Screener::new(YahooProvider::new(), config);
    let report = screener
        .screen(&[symbol.to_string()], &benchmark_symbol, lookback)
        .await?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Instrument Metrics                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Symbol:    {}", symbol.trim().to_uppercase());
    println!("Benchmark: {} ({})", benchmark, benchmark_symbol);
    println!("Lookback:  {} trading days", lookback);
    println!();

    let Some(row) = report.rows().first() else {
        println!("No metrics: the instrument failed fetch or validation.");
        println!("Run `ronda validate {}` for the reason.", symbol);
        println!();
        return Ok(());
    };

    for (name, value) in row.metrics.iter() {
        match value {
            MetricValue::Value(_) => println!("  {:<22} {:>10}", name, value.to_string()),
            MetricValue::Undefined(reason) => {
                println!("  {:<22} {:>10}  ({})", name, "n/a", reason);
            }
        }
    }
    println!();

    Ok(())
}
