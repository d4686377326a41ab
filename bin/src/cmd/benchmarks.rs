//! The `benchmarks` subcommand: list the configured benchmark catalogue.

use anyhow::Result;
use ronda_screen::ScreenerConfig;

pub(crate) fn run(config_path: Option<&str>) -> Result<()> {
    let config = ScreenerConfig::load(config_path)?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Available Benchmarks                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("{:<28} {:<10}", "Name", "Symbol");
    println!("{}", "─".repeat(40));
    for (name, symbol) in &config.benchmarks {
        println!("{:<28} {:<10}", name, symbol);
    }
    println!();
    println!("Use the name or the symbol with `ronda screen --benchmark`.");
    println!("Unrecognized names are treated as raw symbols.");
    println!();

    Ok(())
}
