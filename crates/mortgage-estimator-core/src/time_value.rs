use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::CalculationError;
use crate::types::{Money, Percent, Rate};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Convert an annual percentage into a nominal monthly rate: `annual / 100 / 12`.
pub fn monthly_rate(annual: Percent) -> Result<Rate, CalculationError> {
    annual
        .checked_div(dec!(100))
        .and_then(|r| r.checked_div(MONTHS_PER_YEAR))
        .ok_or_else(|| overflow("monthly rate"))
}

/// `(1 + rate)^nper`
pub fn compound_factor(rate: Rate, nper: u32) -> Result<Decimal, CalculationError> {
    (Decimal::ONE + rate)
        .checked_powi(i64::from(nper))
        .ok_or_else(|| overflow("compound factor"))
}

/// Level payment that amortizes `principal` to zero over `nper` periods:
///
/// ```text
/// P * r * (1 + r)^n / ((1 + r)^n - 1)
/// ```
///
/// A zero rate or zero periods leaves the denominator at zero and is rejected.
pub fn annuity_payment(principal: Money, rate: Rate, nper: u32) -> Result<Money, CalculationError> {
    if nper == 0 {
        return Err(CalculationError::InvalidParameters {
            reason: "number of payments must be greater than zero".into(),
        });
    }

    let factor = compound_factor(rate, nper)?;
    let denominator = factor - Decimal::ONE;

    if denominator.is_zero() {
        return Err(CalculationError::InvalidParameters {
            reason: "annuity factor is zero; interest rate must be greater than zero".into(),
        });
    }

    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| overflow("annuity payment"))
}

fn overflow(context: &str) -> CalculationError {
    CalculationError::Overflow {
        context: context.to_string(),
    }
}
