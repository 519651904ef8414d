//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Finpulse - expense forecasting and financial-health scoring
#[derive(Parser)]
#[command(name = "finpulse")]
#[command(about = "Forecast upcoming expenses and score financial health", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast the next 7 expense amounts from a dated history
    Forecast {
        /// CSV file with a header row and `date,amount` columns
        /// (dates as YYYY-MM-DD)
        #[arg(short, long)]
        file: PathBuf,

        /// Print the forecast as a JSON object instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compute a 0-100 financial-health score from aggregate totals
    Score {
        /// Total income for the period
        #[arg(long)]
        income: f64,

        /// Total expenses for the period
        #[arg(long)]
        expenses: f64,

        /// Total savings (optional)
        #[arg(long, default_value_t = 0.0)]
        savings: f64,

        /// Outstanding debt (optional)
        #[arg(long, default_value_t = 0.0)]
        debt: f64,

        /// Print the result as a JSON object instead of text
        #[arg(long)]
        json: bool,
    },
}
