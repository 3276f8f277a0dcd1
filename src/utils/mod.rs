//! Utility modules for emission calculations
//!
//! Shared functionality used across multiple sections:
//! - Units: kWh/MWh, heat → TJ, L → KL, cost → volume
//! - Rounding: 2-decimal result rounding

pub mod units;
pub mod rounding;

// Re-export commonly used types
pub use units::{
    cost_to_volume, heat_to_tj, heat_to_tj_str, kwh_to_mwh, liters_to_kiloliters, to_mwh,
    ElectricityUnit, HeatUnit,
};
pub use rounding::{round2, round_to};
