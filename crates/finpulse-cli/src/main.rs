//! Finpulse CLI - expense forecasting and financial-health scoring
//!
//! Usage:
//!   finpulse forecast --file history.csv      Project the next 7 expense amounts
//!   finpulse score --income 3000 --expenses 1800   Score financial health

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Forecast { file, json } => commands::cmd_forecast(&file, json),
        Commands::Score {
            income,
            expenses,
            savings,
            debt,
            json,
        } => commands::cmd_score(income, expenses, savings, debt, json),
    }
}
