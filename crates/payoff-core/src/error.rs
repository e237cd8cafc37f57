//! Error types for payoff calculations.

use thiserror::Error;

/// A specialized Result type for payoff operations.
pub type PayoffResult<T> = Result<T, PayoffError>;

/// The error type for payoff operations.
///
/// Every operation in this crate is pure arithmetic, so the only thing that
/// can go wrong is an argument outside the contract's domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayoffError {
    /// An argument failed its domain precondition.
    #[error("Invalid input: {field} = {value} {reason}")]
    InvalidInput {
        /// Name of the offending argument.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: String,
    },
}

impl PayoffError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value,
            reason: reason.into(),
        }
    }

    /// Returns the name of the argument that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PayoffError::invalid_input("strike", -5.0, "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid input: strike = -5 must be greater than zero"
        );
    }

    #[test]
    fn test_field_accessor() {
        let err = PayoffError::invalid_input("premium", f64::NAN, "must be a finite number");
        assert_eq!(err.field(), "premium");
        assert!(err.to_string().contains("NaN"));
    }
}
