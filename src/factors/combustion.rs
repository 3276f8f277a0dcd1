//! Combustion Coefficients
//!
//! Stationary (gas/liquid fuel) and mobile (vehicle) combustion factor sets.
//! Tonnes of gas = activity × heating value × emission factor × 10⁻⁶,
//! then weighted by GWP.
//!
//! Stationary CH4 factors depend on the industry group of the site; mobile
//! factors do not.

use serde::{Deserialize, Serialize};

use super::{DIESEL_PRICE_PER_L, GASOLINE_PRICE_PER_L, LPG_PRICE_PER_L};
use crate::inputs::Industry;

/// Industry grouping that selects stationary CH4 factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndustryGroup {
    /// Energy industries, manufacturing and construction
    EnergyManufacturing,
    /// Commercial/public, residential/other
    CommercialResidential,
}

impl IndustryGroup {
    /// Unset industry falls into the commercial/residential group
    pub fn from_industry(industry: Option<Industry>) -> Self {
        match industry {
            Some(Industry::Energy) | Some(Industry::Manufacturing) => {
                IndustryGroup::EnergyManufacturing
            }
            Some(Industry::Commercial) | Some(Industry::Residential) | None => {
                IndustryGroup::CommercialResidential
            }
        }
    }
}

/// Fuels burned in on-site equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StationaryFuel {
    CityGas,
    Propane,
    Diesel,
    Kerosene,
    Gasoline,
}

impl StationaryFuel {
    pub fn label(&self) -> &'static str {
        match self {
            StationaryFuel::CityGas => "City gas (LNG)",
            StationaryFuel::Propane => "Propane",
            StationaryFuel::Diesel => "Diesel",
            StationaryFuel::Kerosene => "Kerosene",
            StationaryFuel::Gasoline => "Gasoline",
        }
    }
}

/// Fuels burned in combustion-engine vehicles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleFuel {
    Gasoline,
    Diesel,
    Lpg,
}

impl VehicleFuel {
    pub const ALL: [VehicleFuel; 3] = [VehicleFuel::Gasoline, VehicleFuel::Diesel, VehicleFuel::Lpg];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleFuel::Gasoline => "gasoline",
            VehicleFuel::Diesel => "diesel",
            VehicleFuel::Lpg => "lpg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleFuel::Gasoline => "Gasoline",
            VehicleFuel::Diesel => "Diesel",
            VehicleFuel::Lpg => "LPG",
        }
    }

    /// Currency per liter for cost-based input
    pub fn price_per_liter(&self) -> f64 {
        match self {
            VehicleFuel::Gasoline => GASOLINE_PRICE_PER_L,
            VehicleFuel::Diesel => DIESEL_PRICE_PER_L,
            VehicleFuel::Lpg => LPG_PRICE_PER_L,
        }
    }
}

/// Coefficients for one fuel
///
/// CO2 and the non-CO2 gases carry separate heating values because liquid
/// gasoline uses 30.4 for CO2 but 34.2 for CH4/N2O.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CombustionFactors {
    /// Heating value applied to CO2 (MJ/unit, i.e. TJ per thousand units)
    pub co2_heat_coefficient: f64,
    /// Heating value applied to CH4 and N2O
    pub non_co2_heat_coefficient: f64,
    /// kg CO2 / TJ
    pub co2: f64,
    /// kg CH4 / TJ
    pub ch4: f64,
    /// kg N2O / TJ
    pub n2o: f64,
}

impl CombustionFactors {
    const fn uniform(heat: f64, co2: f64, ch4: f64, n2o: f64) -> Self {
        Self {
            co2_heat_coefficient: heat,
            non_co2_heat_coefficient: heat,
            co2,
            ch4,
            n2o,
        }
    }
}

/// Factor set for stationary combustion
pub fn stationary_factors(fuel: StationaryFuel, group: IndustryGroup) -> CombustionFactors {
    use IndustryGroup::*;

    match (fuel, group) {
        // Gaseous fuels: CH4 1 (energy/manufacturing) or 5
        (StationaryFuel::CityGas, EnergyManufacturing) => CombustionFactors::uniform(38.9, 56100.0, 1.0, 0.1),
        (StationaryFuel::CityGas, CommercialResidential) => CombustionFactors::uniform(38.9, 56100.0, 5.0, 0.1),
        (StationaryFuel::Propane, EnergyManufacturing) => CombustionFactors::uniform(46.3, 63100.0, 1.0, 0.1),
        (StationaryFuel::Propane, CommercialResidential) => CombustionFactors::uniform(46.3, 63100.0, 5.0, 0.1),

        // Liquid fuels: CH4 3 (energy/manufacturing) or 10
        (StationaryFuel::Diesel, EnergyManufacturing) => CombustionFactors::uniform(35.2, 74100.0, 3.0, 0.6),
        (StationaryFuel::Diesel, CommercialResidential) => CombustionFactors::uniform(35.2, 74100.0, 10.0, 0.6),
        (StationaryFuel::Kerosene, EnergyManufacturing) => CombustionFactors::uniform(34.2, 71900.0, 3.0, 0.6),
        (StationaryFuel::Kerosene, CommercialResidential) => CombustionFactors::uniform(34.2, 71900.0, 10.0, 0.6),

        // TODO: confirm 30.4 vs 34.2 for gasoline CH4/N2O with the guideline owners; kept as published
        (StationaryFuel::Gasoline, group) => CombustionFactors {
            co2_heat_coefficient: 30.4,
            non_co2_heat_coefficient: 34.2,
            co2: 69300.0,
            ch4: if group == EnergyManufacturing { 3.0 } else { 10.0 },
            n2o: 0.6,
        },
    }
}

/// Factor set for mobile combustion (industry independent)
pub fn mobile_factors(fuel: VehicleFuel) -> CombustionFactors {
    match fuel {
        VehicleFuel::Gasoline => CombustionFactors::uniform(30.4, 69300.0, 25.0, 8.0),
        VehicleFuel::Diesel => CombustionFactors::uniform(35.2, 74100.0, 3.9, 3.9),
        VehicleFuel::Lpg => CombustionFactors::uniform(45.7, 63100.0, 62.0, 0.2),
    }
}
