//! Range checks for the checked evaluation path.
//!
//! The pipeline accepts any finite input and relies on its clamps; these
//! checks additionally enforce the documented range of each parameter.
//! Every range is finite, so a vector that passes stays well inside the
//! magnitudes the pipeline evaluates without saturating a guard.

use policylab_types::{ParameterField, ParameterVector};

use crate::error::InvalidParameterError;

/// Largest accepted labor intensity.
pub const MAX_INTENSITY: f64 = 10.0;

/// Largest accepted wait tolerance, in minutes.
pub const MAX_WAIT_TOLERANCE: f64 = 240.0;

/// Inclusive or exclusive bound of a documented range.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    Inclusive(f64),
    Exclusive(f64),
}

impl Bound {
    fn admits_from_below(self, value: f64) -> bool {
        match self {
            Self::Inclusive(min) => value >= min,
            Self::Exclusive(min) => value > min,
        }
    }

    fn admits_from_above(self, value: f64) -> bool {
        match self {
            Self::Inclusive(max) => value <= max,
            Self::Exclusive(max) => value < max,
        }
    }
}

/// Documented range of a parameter: `(lower, upper, notation)`.
const fn range(field: ParameterField) -> (Bound, Bound, &'static str) {
    match field {
        ParameterField::R => (Bound::Inclusive(0.0), Bound::Exclusive(1.0), "[0, 1)"),
        ParameterField::E => (
            Bound::Exclusive(0.0),
            Bound::Inclusive(MAX_INTENSITY),
            "(0, 10]",
        ),
        ParameterField::Tau => (
            Bound::Exclusive(0.0),
            Bound::Inclusive(MAX_WAIT_TOLERANCE),
            "(0, 240]",
        ),
        ParameterField::Eta => (Bound::Exclusive(0.0), Bound::Inclusive(1.0), "(0, 1]"),
        ParameterField::Lambda
        | ParameterField::Monitoring
        | ParameterField::Competition
        | ParameterField::Regulation
        | ParameterField::Innovation => (Bound::Inclusive(0.0), Bound::Inclusive(1.0), "[0, 1]"),
    }
}

/// Check one value against its field's documented range.
pub fn validate_field(field: ParameterField, value: f64) -> Result<(), InvalidParameterError> {
    if !value.is_finite() {
        return Err(InvalidParameterError::NonFinite { field, value });
    }
    let (lower, upper, expected) = range(field);
    if lower.admits_from_below(value) && upper.admits_from_above(value) {
        Ok(())
    } else {
        Err(InvalidParameterError::OutOfRange {
            field,
            value,
            expected,
        })
    }
}

/// Check every field; the first failure in declaration order is reported.
///
/// A vector that passes always yields a positive effective intensity,
/// since blending toward the social optimum keeps at least 55% of `e`.
pub fn validate(params: &ParameterVector) -> Result<(), InvalidParameterError> {
    const ORDER: [ParameterField; 9] = [
        ParameterField::R,
        ParameterField::E,
        ParameterField::Eta,
        ParameterField::Tau,
        ParameterField::Lambda,
        ParameterField::Monitoring,
        ParameterField::Competition,
        ParameterField::Regulation,
        ParameterField::Innovation,
    ];
    for field in ORDER {
        validate_field(field, params.get(field))?;
    }
    Ok(())
}
