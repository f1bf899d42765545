pub mod amortization;
pub mod validation;

pub use amortization::{calculate, estimate};
pub use validation::{validate, RawMortgageInput, ValidationOutcome};
