//! Ronda CLI binary.
//!
//! Provides a command-line interface for the ronda stock screener.

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ronda")]
#[command(about = "Benchmark-relative stock screener", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen instruments against a benchmark and rank by Information Ratio
    Screen {
        /// Ticker symbols to screen (defaults to the configured universe)
        #[arg(short, long, value_delimiter = ',')]
        symbols: Vec<String>,

        /// Benchmark name or symbol (e.g., "S&P 500" or "^GSPC")
        #[arg(short, long, default_value = "S&P 500")]
        benchmark: String,

        /// Lookback window in trading days
        #[arg(short, long)]
        lookback: Option<usize>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Path to a price-cache snapshot, loaded before and saved after the run
        #[arg(long)]
        cache: Option<String>,
    },

    /// Show the full metric set for a single instrument
    Metrics {
        /// Ticker symbol
        symbol: String,

        /// Benchmark name or symbol
        #[arg(short, long, default_value = "S&P 500")]
        benchmark: String,

        /// Lookback window in trading days
        #[arg(short, long)]
        lookback: Option<usize>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Fetch and validate a single instrument's price series
    Validate {
        /// Ticker symbol
        symbol: String,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// List the configured benchmark catalogue
    Benchmarks {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env if present, then route diagnostics to stderr so piped
    // output stays clean.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Screen {
            symbols,
            benchmark,
            lookback,
            config,
            format,
            cache,
        } => {
            cmd::screen::run(
                &symbols,
                &benchmark,
                lookback,
                config.as_deref(),
                &format,
                cache.as_deref(),
            )
            .await?;
        }
        Commands::Metrics {
            symbol,
            benchmark,
            lookback,
            config,
        } => {
            cmd::metrics::run(&symbol, &benchmark, lookback, config.as_deref()).await?;
        }
        Commands::Validate { symbol, config } => {
            cmd::validate::run(&symbol, config.as_deref()).await?;
        }
        Commands::Benchmarks { config } => {
            cmd::benchmarks::run(config.as_deref())?;
        }
    }

    Ok(())
}
