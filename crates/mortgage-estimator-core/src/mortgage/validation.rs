use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldErrorKind, FieldErrors, MortgageField};
use crate::types::{MortgageInput, MortgageType};

pub const AMOUNT_MIN: f64 = 1_000.0;
pub const AMOUNT_MAX: f64 = 10_000_000.0;
pub const YEARS_MIN: f64 = 5.0;
pub const YEARS_MAX: f64 = 35.0;
pub const RATE_MIN: f64 = 0.1;
pub const RATE_MAX: f64 = 15.0;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Form values as collected by the presentation layer, before any checks.
///
/// Missing numeric fields read as zero (the form coerces non-numeric entry the
/// same way) and therefore fail their minimum bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMortgageInput {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub years: f64,
    #[serde(default)]
    pub interest_rate: f64,
    #[serde(rename = "type", default)]
    pub mortgage_type: String,
}

impl RawMortgageInput {
    /// Values the estimator form is pre-filled with.
    pub fn form_defaults() -> Self {
        Self {
            amount: 300_000.0,
            years: 25.0,
            interest_rate: 5.25,
            mortgage_type: MortgageType::Repayment.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Bounds-check and normalise raw form input.
///
/// Every field is checked independently; on failure all rejected fields are
/// reported together.
pub fn validate(raw: &RawMortgageInput) -> Result<MortgageInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let amount = bounded(MortgageField::Amount, raw.amount, AMOUNT_MIN, AMOUNT_MAX)
        .and_then(|v| to_decimal(MortgageField::Amount, v))
        .map(round_to_pence);
    let years = bounded(MortgageField::Years, raw.years, YEARS_MIN, YEARS_MAX)
        .map(|v| v.round() as u32);
    let interest_rate = bounded(
        MortgageField::InterestRate,
        raw.interest_rate,
        RATE_MIN,
        RATE_MAX,
    )
    .and_then(|v| to_decimal(MortgageField::InterestRate, v))
    .map(round_to_pence);
    let mortgage_type = raw.mortgage_type.parse::<MortgageType>().map_err(|v| {
        FieldError::new(MortgageField::MortgageType, FieldErrorKind::UnknownVariant(v))
    });

    let amount = collect(amount, &mut errors);
    let years = collect(years, &mut errors);
    let interest_rate = collect(interest_rate, &mut errors);
    let mortgage_type = collect(mortgage_type, &mut errors);

    match (amount, years, interest_rate, mortgage_type) {
        (Some(amount), Some(years), Some(interest_rate), Some(mortgage_type)) => {
            Ok(MortgageInput {
                amount,
                years,
                interest_rate,
                mortgage_type,
            })
        }
        _ => Err(errors),
    }
}

/// Validation result as data, for callers that render field errors rather
/// than propagate them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid { input: MortgageInput },
    Invalid { errors: FieldErrors },
}

pub fn outcome(raw: &RawMortgageInput) -> ValidationOutcome {
    match validate(raw) {
        Ok(input) => ValidationOutcome::Valid { input },
        Err(errors) => ValidationOutcome::Invalid { errors },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Range check on the raw value; rounding happens afterwards.
fn bounded(field: MortgageField, value: f64, min: f64, max: f64) -> Result<f64, FieldError> {
    if !value.is_finite() {
        return Err(FieldError::new(field, FieldErrorKind::NotFinite));
    }
    if value < min {
        return Err(FieldError::new(field, FieldErrorKind::BelowMinimum));
    }
    if value > max {
        return Err(FieldError::new(field, FieldErrorKind::AboveMaximum));
    }
    Ok(value)
}

fn to_decimal(field: MortgageField, value: f64) -> Result<Decimal, FieldError> {
    Decimal::from_f64(value).ok_or_else(|| FieldError::new(field, FieldErrorKind::NotFinite))
}

fn round_to_pence(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut FieldErrors) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}
