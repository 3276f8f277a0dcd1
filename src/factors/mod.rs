//! Emission Factor Tables
//!
//! Static coefficients from the national GHG reporting guideline (Tier 1/2,
//! factor-based method). Everything here is immutable for the lifetime of
//! the process.
//!
//! - GWP: IPCC Second Assessment Report (CO2 = 1, CH4 = 21, N2O = 310)
//! - Grid electricity: t CO2 / MWh, kg CH4 / MWh, kg N2O / MWh
//! - Combustion: heating value × emission factor (kg / TJ), see `combustion`
//! - District heating: per-provider kg / TJ, see `district_heating`
//! - Prices: fixed unit prices for cost-based input

use serde::Serialize;

pub mod combustion;
pub mod district_heating;

pub use combustion::{
    mobile_factors, stationary_factors, CombustionFactors, IndustryGroup, StationaryFuel,
    VehicleFuel,
};
pub use district_heating::{DistrictHeatingProvider, HeatEmissionFactors, OTHERS_FLAT_FACTOR};

pub const GWP_CO2: f64 = 1.0;
pub const GWP_CH4: f64 = 21.0;
pub const GWP_N2O: f64 = 310.0;

/// Fraction of carbon oxidised; 1.0 in every current formula
pub const OXIDATION_FACTOR: f64 = 1.0;

/// kg/TJ × TJ-per-unit → tonnes
pub const TIER_SCALE: f64 = 1e-6;

/// Grid electricity factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridElectricityFactors {
    /// t CO2 / MWh
    pub co2: f64,
    /// kg CH4 / MWh
    pub ch4: f64,
    /// kg N2O / MWh
    pub n2o: f64,
}

pub const GRID_ELECTRICITY: GridElectricityFactors = GridElectricityFactors {
    co2: 0.4567,
    ch4: 0.0036,
    n2o: 0.0085,
};

// ============================================================================
// Conversion prices (currency per unit), used only for cost-based input
// ============================================================================

pub const GASOLINE_PRICE_PER_L: f64 = 1646.71;
pub const DIESEL_PRICE_PER_L: f64 = 1502.69;
pub const LPG_PRICE_PER_L: f64 = 995.25;
pub const ELECTRICITY_PRICE_PER_KWH: f64 = 324.4;
