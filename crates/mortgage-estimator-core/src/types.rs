use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Annual rates quoted in percent (5.25 = 5.25%), as entered on the form.
pub type Percent = Decimal;

/// Periodic rates expressed as decimals (0.004375 = 0.4375% per month).
pub type Rate = Decimal;

/// Loan structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MortgageType {
    /// Level payments amortize principal and interest to zero by term end.
    #[default]
    Repayment,
    /// Payments cover interest only; principal is repaid as a lump sum at term end.
    InterestOnly,
}

impl MortgageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Repayment => "repayment",
            Self::InterestOnly => "interest-only",
        }
    }
}

impl std::fmt::Display for MortgageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MortgageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repayment" => Ok(Self::Repayment),
            "interest-only" => Ok(Self::InterestOnly),
            other => Err(other.to_string()),
        }
    }
}

/// Normalised loan terms. Produced by the validator; consumed as-is by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageInput {
    pub amount: Money,
    pub years: u32,
    pub interest_rate: Percent,
    #[serde(rename = "type")]
    pub mortgage_type: MortgageType,
}

/// Projected payments, each rounded to the penny.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageResult {
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub interest_total: Money,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
