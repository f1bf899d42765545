use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input fields accepted by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MortgageField {
    Amount,
    Years,
    InterestRate,
    #[serde(rename = "type")]
    MortgageType,
}

impl MortgageField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Years => "years",
            Self::InterestRate => "interest_rate",
            Self::MortgageType => "type",
        }
    }
}

impl std::fmt::Display for MortgageField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    BelowMinimum,
    AboveMaximum,
    NotFinite,
    UnknownVariant(String),
}

/// A single rejected field. The message is what the form shows under the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: MortgageField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: MortgageField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    pub fn message(&self) -> String {
        use FieldErrorKind::*;
        use MortgageField::*;

        match (&self.field, &self.kind) {
            (Amount, BelowMinimum) => "Minimum amount is £1,000".into(),
            (Amount, AboveMaximum) => "Maximum amount is £10,000,000".into(),
            (Years, BelowMinimum) => "Minimum term is 5 years".into(),
            (Years, AboveMaximum) => "Maximum term is 35 years".into(),
            (InterestRate, BelowMinimum) => "Minimum rate is 0.1%".into(),
            (InterestRate, AboveMaximum) => "Maximum rate is 15%".into(),
            (_, UnknownVariant(v)) => {
                format!("Unknown mortgage type '{v}'; expected 'repayment' or 'interest-only'")
            }
            (field, NotFinite) => format!("{field} must be a finite number"),
            (MortgageType, _) => "Mortgage type is invalid".into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

impl std::error::Error for FieldError {}

impl Serialize for FieldError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("FieldError", 3)?;
        s.serialize_field("field", &self.field)?;
        s.serialize_field("kind", &self.kind)?;
        s.serialize_field("message", &self.message())?;
        s.end()
    }
}

/// Every field that failed validation, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// The error reported for `field`, if any.
    pub fn get(&self, field: MortgageField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid input in {} field(s):", self.0.len())?;
        for e in &self.0 {
            write!(f, "\n  - {e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Raised by the amortization engine when called with inputs it cannot price.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("Invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },
}

#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("{0}")]
    Validation(#[from] FieldErrors),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculationError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for MortgageError {
    fn from(e: serde_json::Error) -> Self {
        MortgageError::SerializationError(e.to_string())
    }
}
