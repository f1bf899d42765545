pub mod error;
pub mod mortgage;
pub mod time_value;
pub mod types;

pub use error::{CalculationError, FieldError, FieldErrorKind, FieldErrors, MortgageError, MortgageField};
pub use types::*;

/// Standard result type for all mortgage-estimator operations
pub type EstimatorResult<T> = Result<T, MortgageError>;
