//! Error types for Escalar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Escalar operations.
///
/// Provides detailed context about failures including shape mismatches
/// between fitted and query data and invalid hyperparameters.
///
/// # Examples
///
/// ```
/// use escalar::error::EscalarError;
///
/// let err = EscalarError::DimensionMismatch {
///     expected: "2 features".to_string(),
///     actual: "3 features".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum EscalarError {
    /// Query data shape doesn't match the fitted shape.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Input data cannot be fitted (empty, or no usable values).
    ValidationError {
        /// Validation failure message
        message: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for EscalarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscalarError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Shape dimension mismatch: expected {expected}, got {actual}"
                )
            }
            EscalarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            EscalarError::ValidationError { message } => {
                write!(f, "Validation failed: {message}")
            }
            EscalarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EscalarError {}

impl From<&str> for EscalarError {
    fn from(msg: &str) -> Self {
        EscalarError::Other(msg.to_string())
    }
}

impl From<String> for EscalarError {
    fn from(msg: String) -> Self {
        EscalarError::Other(msg)
    }
}

impl EscalarError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }
}

/// Result type alias for Escalar operations.
pub type Result<T> = std::result::Result<T, EscalarError>;
