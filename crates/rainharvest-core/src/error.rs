//! Boundary validation errors.
//!
//! The simulation functions themselves never fail; these are raised only by
//! the validating constructors that sit between callers and the engine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HarvestError {
    #[error("roof area must be greater than 0 m², got {0}")]
    InvalidRoofArea(f64),

    #[error("runoff coefficient must be within [{min}, {max}], got {value}")]
    InvalidRunoffCoefficient { value: f64, min: f64, max: f64 },

    #[error("number of simulated days must be greater than 0")]
    InvalidDays,

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, HarvestError>;

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HarvestError::NonFinite { field, value })
    }
}

/// Reject NaN, infinities and values below zero.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(HarvestError::Negative { field, value });
    }
    Ok(value)
}
