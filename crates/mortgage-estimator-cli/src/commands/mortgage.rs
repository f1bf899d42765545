use clap::Args;
use serde_json::Value;

use mortgage_estimator_core::mortgage::{self, RawMortgageInput};

use crate::input;

/// Loan terms shared by every mortgage subcommand
#[derive(Args)]
pub struct LoanArgs {
    /// Amount borrowed in pounds (1,000 to 10,000,000)
    #[arg(long, default_value_t = 300_000.0)]
    pub amount: f64,

    /// Mortgage term in years (5 to 35)
    #[arg(long, default_value_t = 25.0)]
    pub years: f64,

    /// Annual interest rate in percent (e.g. 5.25 for 5.25%)
    #[arg(long, alias = "interest-rate", default_value_t = 5.25)]
    pub rate: f64,

    /// Mortgage type: repayment or interest-only
    #[arg(long = "type", default_value = "repayment")]
    pub mortgage_type: String,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a payment estimate
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

/// Arguments for input validation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

pub fn run_estimate(args: EstimateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let raw = read_loan(args.loan)?;
    let output = mortgage::estimate(&raw)?;
    tracing::debug!(
        monthly_payment = %output.result.monthly_payment,
        total_payment = %output.result.total_payment,
        "estimate complete"
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let raw = read_loan(args.loan)?;
    let normalised = mortgage::validate(&raw)?;
    Ok(serde_json::to_value(normalised)?)
}

fn read_loan(args: LoanArgs) -> Result<RawMortgageInput, Box<dyn std::error::Error>> {
    let raw: RawMortgageInput = if let Some(ref path) = args.input {
        tracing::debug!(path = %path, "reading loan terms from file");
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        tracing::debug!("reading loan terms from stdin");
        serde_json::from_value(data)?
    } else {
        RawMortgageInput {
            amount: args.amount,
            years: args.years,
            interest_rate: args.rate,
            mortgage_type: args.mortgage_type,
        }
    };
    tracing::debug!(?raw, "loan terms");
    Ok(raw)
}
