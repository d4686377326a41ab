//! The `screen` subcommand: rank a universe against a benchmark.

use anyhow::Result;
use ronda_screen::{Screener, ScreenerConfig};
use ronda_traits::metric::{
    ALPHA, BETA, INFORMATION_RATIO, MetricValue, RELATIVE_STRENGTH, SHARPE_RATIO, TOTAL_RETURN,
    ScreeningRow,
};
use ronda_yahoo::YahooProvider;
use std::path::Path;

pub(crate) async fn run(
    symbols: &[String],
    benchmark: &str,
    lookback: Option<usize>,
    config_path: Option<&str>,
    format: &str,
    cache_path: Option<&str>,
) -> Result<()> {
    let config = ScreenerConfig::load(config_path)?;
    let benchmark_symbol = config.resolve_benchmark(benchmark);
    let instruments: Vec<String> = if symbols.is_empty() {
        config.default_instruments.clone()
    } else {
        symbols.to_vec()
    };
    let lookback = lookback.unwrap_or(config.default_lookback);

    let provider = YahooProvider::new();
    // Clones share storage, so this handle sees the run's fetches.
    let cache = provider.cache().clone();
    if let Some(path) = cache_path {
        cache.load(Path::new(path)).await;
    }

    let screener = Screener::new(provider, config);
    let report = screener
        .screen(&instruments, &benchmark_symbol, lookback)
        .await?;

    if let Some(path) = cache_path {
        cache.persist(Path::new(path)).await?;
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(report.rows())?);
        return Ok(());
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Screening Results                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Benchmark: {} ({})", benchmark, benchmark_symbol);
    println!("Lookback:  {} trading days", lookback);
    println!("Screened:  {} instruments", instruments.len());
    println!();

    if report.is_empty() {
        println!("No instruments passed validation.");
        println!();
        return Ok(());
    }

    println!(
        "{:<4} {:<8} {:>10} {:>10} {:>8} {:>10} {:>10} {:>10}",
        "Rank", "Symbol", "IR", "Sharpe", "Beta", "Alpha", "RelStr", "TotRet"
    );
    println!("{}", "─".repeat(76));

    for (rank, row) in report.rows().iter().enumerate() {
        println!(
            "{:<4} {:<8} {:>10} {:>10} {:>8} {:>10} {:>10} {:>10}",
            rank + 1,
            row.symbol,
            cell(row, INFORMATION_RATIO),
            cell(row, SHARPE_RATIO),
            cell(row, BETA),
            cell(row, ALPHA),
            cell(row, RELATIVE_STRENGTH),
            cell(row, TOTAL_RETURN),
        );
    }

    println!();
    println!("Ranked descending by Information Ratio; n/a sorts last.");
    println!();

    Ok(())
}

fn cell(row: &ScreeningRow, name: &str) -> String {
    row.metrics
        .get(name)
        .map_or_else(|| "n/a".to_string(), MetricValue::to_string)
}
