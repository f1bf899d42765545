use rust_decimal::{Decimal, RoundingStrategy};
use std::time::Instant;

use crate::error::CalculationError;
use crate::mortgage::validation::{self, RawMortgageInput};
use crate::time_value;
use crate::types::*;
use crate::EstimatorResult;

const MONTHS_PER_YEAR: u32 = 12;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project the monthly payment, total repaid and total interest for a loan.
///
/// Inputs are taken as given; range policing is the validator's job. Only the
/// returned figures are rounded, every intermediate stays at full precision.
pub fn calculate(input: &MortgageInput) -> Result<MortgageResult, CalculationError> {
    check_preconditions(input)?;

    let monthly_rate = time_value::monthly_rate(input.interest_rate)?;
    let number_of_payments = input
        .years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| overflow("number of payments"))?;
    let n = Decimal::from(number_of_payments);

    let (monthly_payment, total_payment, interest_total) = match input.mortgage_type {
        MortgageType::InterestOnly => {
            let monthly_payment = input
                .amount
                .checked_mul(monthly_rate)
                .ok_or_else(|| overflow("interest-only payment"))?;
            let interest_total = monthly_payment
                .checked_mul(n)
                .ok_or_else(|| overflow("total interest"))?;
            // Principal falls due as a single lump sum at term end
            let total_payment = interest_total
                .checked_add(input.amount)
                .ok_or_else(|| overflow("total payment"))?;
            (monthly_payment, total_payment, interest_total)
        }
        MortgageType::Repayment => {
            let monthly_payment =
                time_value::annuity_payment(input.amount, monthly_rate, number_of_payments)?;
            let total_payment = monthly_payment
                .checked_mul(n)
                .ok_or_else(|| overflow("total payment"))?;
            let interest_total = total_payment - input.amount;
            (monthly_payment, total_payment, interest_total)
        }
    };

    Ok(MortgageResult {
        monthly_payment: round_to_pence(monthly_payment),
        total_payment: round_to_pence(total_payment),
        interest_total: round_to_pence(interest_total),
    })
}

/// Validate raw form input, price it, and wrap the result in the standard envelope.
pub fn estimate(raw: &RawMortgageInput) -> EstimatorResult<ComputationOutput<MortgageResult>> {
    let start = Instant::now();

    let input = validation::validate(raw)?;
    let result = calculate(&input)?;

    let mut warnings: Vec<String> = Vec::new();
    if input.mortgage_type == MortgageType::InterestOnly {
        warnings.push(format!(
            "Principal of £{:.2} is due as a lump sum at term end.",
            input.amount
        ));
    }
    if result.interest_total > input.amount {
        warnings.push("Total interest exceeds the amount borrowed.".into());
    }

    let methodology = match input.mortgage_type {
        MortgageType::Repayment => "Level-payment amortization, monthly compounding",
        MortgageType::InterestOnly => "Interest-only, principal repaid at maturity",
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology, &input, warnings, elapsed, result))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn check_preconditions(input: &MortgageInput) -> Result<(), CalculationError> {
    let mut problems: Vec<&str> = Vec::new();
    if input.amount <= Decimal::ZERO {
        problems.push("amount must be positive");
    }
    if input.interest_rate <= Decimal::ZERO {
        problems.push("interest rate must be positive");
    }
    if input.years == 0 {
        problems.push("term must be at least one year");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CalculationError::InvalidParameters {
            reason: problems.join("; "),
        })
    }
}

fn round_to_pence(value: Money) -> Money {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn overflow(context: &str) -> CalculationError {
    CalculationError::Overflow {
        context: context.to_string(),
    }
}
