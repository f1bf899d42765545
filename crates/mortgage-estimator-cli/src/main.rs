mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::mortgage::{EstimateArgs, ValidateArgs};

/// Mortgage payment estimates
#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "Mortgage payment estimates",
    long_about = "Estimate the monthly payment, total repaid and total interest for a \
                  repayment or interest-only mortgage. Inputs are validated against the \
                  same bounds the estimator form uses."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate inputs and estimate mortgage payments
    Estimate(EstimateArgs),
    /// Validate and normalise inputs without pricing them
    Validate(ValidateArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    // Diagnostics go to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Estimate(args) => commands::mortgage::run_estimate(args),
        Commands::Validate(args) => commands::mortgage::run_validate(args),
        Commands::Version => {
            println!("mortgage {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
