use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use signratio::cli::{Cli, Commands, DEMO_SEQUENCE};
use signratio::report_ratios;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo()?,
    }

    Ok(())
}

fn run_demo() -> Result<()> {
    let values: Vec<f64> = DEMO_SEQUENCE.iter().copied().map(f64::from).collect();
    tracing::info!(n = values.len(), "demo sequence loaded");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report_ratios(&values, &mut out)
}
