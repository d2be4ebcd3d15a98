//! Error types for formula evaluation

use thiserror::Error;

/// Result alias used across the formula modules
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Errors raised by the formula library
///
/// Arithmetic domain failures (log of a non-positive number, division by a
/// zero rate) are not errors here: they surface as NaN or infinity in the
/// returned value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    /// A tag string or code did not match any accepted spelling
    #[error("Unrecognized {expected} tag: {tag:?}")]
    UnrecognizedTag {
        /// The rejected input
        tag: String,
        /// Which tag family was being parsed
        expected: &'static str,
    },

    /// Polynomial root iteration did not settle
    #[error("Root finding failed to converge after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        iterations: u32,
        residual: f64,
    },

    /// Structurally invalid input
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl FormulaError {
    pub(crate) fn unrecognized(tag: impl Into<String>, expected: &'static str) -> Self {
        FormulaError::UnrecognizedTag {
            tag: tag.into(),
            expected,
        }
    }
}
