//! Section calculators
//!
//! One module per activity category. Each calculator is a pure function of
//! its inputs: convert units, look up coefficients, compute CO2/CH4/N2O in
//! tCO2e, and round the section total to 2 decimals once at the end.

pub mod s1_electricity;
pub mod s2_district_heating;
pub mod s3_gas_fuel;
pub mod s4_liquid_fuel;
pub mod s5_vehicle;
pub mod s6_electric_vehicle;

// Re-export section functions
pub use s1_electricity::{calculate_electricity, ElectricityResult};
pub use s2_district_heating::calculate_district_heating;
pub use s3_gas_fuel::{calculate_city_gas, calculate_propane};
pub use s4_liquid_fuel::calculate_liquid_fuel;
pub use s5_vehicle::calculate_vehicle;
pub use s6_electric_vehicle::calculate_electric_vehicle;

use serde::Serialize;
use std::ops::Add;

use crate::factors::{
    CombustionFactors, DistrictHeatingProvider, GridElectricityFactors, HeatEmissionFactors,
    StationaryFuel, VehicleFuel, GRID_ELECTRICITY, GWP_CH4, GWP_CO2, GWP_N2O, OXIDATION_FACTOR,
    TIER_SCALE,
};

/// Direct (on-site combustion) or indirect (purchased energy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionScope {
    Direct,
    Indirect,
}

impl EmissionScope {
    pub fn label(&self) -> &'static str {
        match self {
            EmissionScope::Direct => "Direct emissions (Scope 1)",
            EmissionScope::Indirect => "Indirect emissions (Scope 2)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EmissionScope::Direct => {
                "Emissions released on site by burning fuel in owned equipment and combustion-engine vehicles."
            }
            EmissionScope::Indirect => {
                "Emissions released elsewhere to produce the electricity and heat the site purchases, including electric vehicle charging."
            }
        }
    }
}

/// CO2 / CH4 / N2O split, each already in tCO2e
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GasEmissions {
    pub co2: f64,
    pub ch4: f64,
    pub n2o: f64,
}

impl GasEmissions {
    pub fn total(&self) -> f64 {
        self.co2 + self.ch4 + self.n2o
    }
}

impl Add for GasEmissions {
    type Output = GasEmissions;

    fn add(self, rhs: GasEmissions) -> GasEmissions {
        GasEmissions {
            co2: self.co2 + rhs.co2,
            ch4: self.ch4 + rhs.ch4,
            n2o: self.n2o + rhs.n2o,
        }
    }
}

/// What produced a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmissionSource {
    GridElectricity,
    DistrictHeating(DistrictHeatingProvider),
    Stationary(StationaryFuel),
    Vehicle(VehicleFuel),
    ElectricVehicle,
}

/// Coefficients a component was computed with
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorsUsed {
    Grid(GridElectricityFactors),
    Heat(HeatEmissionFactors),
    /// tCO2e per Mcal, no gas split
    FlatHeat(f64),
    Combustion(CombustionFactors),
}

/// One formula application inside a section (a fuel, or the whole section)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionComponent {
    pub source: EmissionSource,
    /// Activity after unit conversion, in `activity_unit`
    pub activity: f64,
    pub activity_unit: &'static str,
    pub factors: FactorsUsed,
    /// Unrounded per-gas tCO2e; `None` for the flat district heating fallback
    pub gases: Option<GasEmissions>,
    /// Unrounded tCO2e
    pub co2e: f64,
}

/// Result of one section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionResult {
    /// tCO2e rounded to 2 decimals
    pub emissions: f64,
    #[serde(rename = "type")]
    pub scope: EmissionScope,
    pub components: Vec<EmissionComponent>,
}

impl SectionResult {
    pub fn empty(scope: EmissionScope) -> Self {
        Self {
            emissions: 0.0,
            scope,
            components: Vec::new(),
        }
    }
}

/// Combustion formula: activity × heating value × factor × 10⁻⁶ × GWP
pub(crate) fn combustion_gases(activity: f64, f: &CombustionFactors) -> GasEmissions {
    GasEmissions {
        co2: (activity * f.co2_heat_coefficient * f.co2 * OXIDATION_FACTOR * TIER_SCALE) * GWP_CO2,
        ch4: (activity * f.non_co2_heat_coefficient * f.ch4 * TIER_SCALE) * GWP_CH4,
        n2o: (activity * f.non_co2_heat_coefficient * f.n2o * TIER_SCALE) * GWP_N2O,
    }
}

pub(crate) fn combustion_component(
    source: EmissionSource,
    activity: f64,
    activity_unit: &'static str,
    factors: CombustionFactors,
) -> EmissionComponent {
    let gases = combustion_gases(activity, &factors);
    EmissionComponent {
        source,
        activity,
        activity_unit,
        factors: FactorsUsed::Combustion(factors),
        co2e: gases.total(),
        gases: Some(gases),
    }
}

/// Grid formula: MWh × 0.4567 + MWh × 0.0036/1000 × 21 + MWh × 0.0085/1000 × 310
pub(crate) fn grid_gases(usage_mwh: f64) -> GasEmissions {
    let f = GRID_ELECTRICITY;
    GasEmissions {
        co2: usage_mwh * f.co2,
        ch4: usage_mwh * f.ch4 / 1000.0 * GWP_CH4,
        n2o: usage_mwh * f.n2o / 1000.0 * GWP_N2O,
    }
}

pub(crate) fn grid_component(source: EmissionSource, usage_mwh: f64) -> EmissionComponent {
    let gases = grid_gases(usage_mwh);
    EmissionComponent {
        source,
        activity: usage_mwh,
        activity_unit: "MWh",
        factors: FactorsUsed::Grid(GRID_ELECTRICITY),
        co2e: gases.total(),
        gases: Some(gases),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::{mobile_factors, stationary_factors, IndustryGroup};
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_gases() {
        let gases = grid_gases(100.0);
        assert_relative_eq!(gases.co2, 45.67, epsilon = 1e-9);
        assert_relative_eq!(gases.ch4, 0.00756, epsilon = 1e-12);
        assert_relative_eq!(gases.n2o, 0.2635, epsilon = 1e-12);
    }

    #[test]
    fn test_combustion_gases_city_gas() {
        let f = stationary_factors(StationaryFuel::CityGas, IndustryGroup::EnergyManufacturing);
        let gases = combustion_gases(1.0, &f);
        assert_relative_eq!(gases.co2, 2.18229, epsilon = 1e-9);
        assert_relative_eq!(gases.ch4, 0.0008169, epsilon = 1e-12);
        assert_relative_eq!(gases.n2o, 0.0012059, epsilon = 1e-12);
    }

    #[test]
    fn test_combustion_gases_scale_linearly() {
        let f = mobile_factors(VehicleFuel::Diesel);
        let one = combustion_gases(1.0, &f).total();
        let three = combustion_gases(3.0, &f).total();
        assert_relative_eq!(three, 3.0 * one, epsilon = 1e-12);
    }

    #[test]
    fn test_gas_addition() {
        let a = GasEmissions { co2: 1.0, ch4: 0.1, n2o: 0.01 };
        let b = GasEmissions { co2: 2.0, ch4: 0.2, n2o: 0.02 };
        let sum = a + b;
        assert_relative_eq!(sum.total(), 3.33, epsilon = 1e-12);
    }
}
