//! Error types for the `policylab-core` crate.
//!
//! The equilibrium pipeline itself is infallible: its guards are clamps
//! inside the formulas. [`InvalidParameterError`] belongs to the checked
//! evaluation path, which rejects inputs before any arithmetic runs.

use policylab_types::ParameterField;

/// A parameter vector was rejected by the checked evaluation path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidParameterError {
    /// The value is NaN or infinite.
    #[error("parameter {field} must be finite, got {value}")]
    NonFinite {
        /// The offending field.
        field: ParameterField,
        /// The rejected value.
        value: f64,
    },

    /// The value lies outside the field's documented range.
    #[error("parameter {field} = {value} is outside {expected}")]
    OutOfRange {
        /// The offending field.
        field: ParameterField,
        /// The rejected value.
        value: f64,
        /// The documented range, in interval notation.
        expected: &'static str,
    },
}

impl InvalidParameterError {
    /// The field that failed validation.
    pub const fn field(&self) -> ParameterField {
        match self {
            Self::NonFinite { field, .. } | Self::OutOfRange { field, .. } => *field,
        }
    }
}
