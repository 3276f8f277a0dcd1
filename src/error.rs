//! Error taxonomy for the calculation engine

use thiserror::Error;

/// Errors raised by unit conversion and static-table lookups.
///
/// None of these abort a full calculation on user input alone: units arrive
/// already typed, prices are compile-time constants, and missing custom
/// district heating factors degrade to the flat fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("unrecognized unit: '{0}'")]
    InvalidUnit(String),

    #[error("conversion price for {fuel} must be positive (got {price})")]
    InvalidPrice { fuel: &'static str, price: f64 },

    #[error("district heating provider 'others' requires custom emission factors")]
    MissingCustomFactors,
}

pub type Result<T> = std::result::Result<T, CalculationError>;
