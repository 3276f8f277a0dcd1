//! Calculator session
//!
//! Owned state for the presentation boundary: one `ActivityInputs`, mutated
//! through `InputUpdate` values, recomputed only when asked.

use crate::aggregator::{calculate_total_emissions, CalculationResult};
use crate::factors::{DistrictHeatingProvider, HeatEmissionFactors, VehicleFuel};
use crate::inputs::{ActivityInputs, Industry, InputMode};
use crate::utils::{ElectricityUnit, HeatUnit};
use crate::validity::has_any_input_value;

/// Liquid fuel selector for updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidFuel {
    Diesel,
    Kerosene,
    Gasoline,
}

/// A single structured field update
#[derive(Debug, Clone, PartialEq)]
pub enum InputUpdate {
    Industry(Option<Industry>),

    ElectricityTotal(f64),
    ElectricityRenewable(f64),
    ElectricityConventional(f64),
    /// Clears total, renewable and conventional
    ElectricityHasRenewable(bool),
    ElectricityUnit(ElectricityUnit),

    DistrictHeatingProvider(DistrictHeatingProvider),
    DistrictHeatingAmount(f64),
    DistrictHeatingUnit(HeatUnit),
    DistrictHeatingCustomFactors(HeatEmissionFactors),

    CityGasAmount(f64),
    PropaneAmount(f64),
    LiquidFuelAmount(LiquidFuel, f64),

    VehicleInputType(InputMode),
    VehicleFuelAmount(VehicleFuel, f64),
    VehicleFuelCost(VehicleFuel, f64),

    ElectricVehicleInputType(InputMode),
    ElectricVehicleAmount(f64),
    ElectricVehicleCost(f64),
    ElectricVehicleUnit(ElectricityUnit),
}

/// Negative and NaN entries become 0
fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

#[derive(Debug, Default)]
pub struct CalculatorSession {
    inputs: ActivityInputs,
    cached: Option<(ActivityInputs, CalculationResult)>,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(inputs: ActivityInputs) -> Self {
        Self { inputs, cached: None }
    }

    pub fn inputs(&self) -> &ActivityInputs {
        &self.inputs
    }

    /// Apply one field update
    pub fn apply(&mut self, update: InputUpdate) {
        let inputs = &mut self.inputs;
        match update {
            InputUpdate::Industry(industry) => inputs.industry = industry,

            InputUpdate::ElectricityTotal(v) => inputs.electricity.total = non_negative(v),
            InputUpdate::ElectricityRenewable(v) => inputs.electricity.renewable = non_negative(v),
            InputUpdate::ElectricityConventional(v) => inputs.electricity.conventional = non_negative(v),
            InputUpdate::ElectricityHasRenewable(on) => {
                inputs.electricity.has_renewable = on;
                inputs.electricity.total = 0.0;
                inputs.electricity.renewable = 0.0;
                inputs.electricity.conventional = 0.0;
            }
            InputUpdate::ElectricityUnit(unit) => inputs.electricity.unit = unit,

            InputUpdate::DistrictHeatingProvider(p) => inputs.district_heating.provider = p,
            InputUpdate::DistrictHeatingAmount(v) => inputs.district_heating.amount = non_negative(v),
            InputUpdate::DistrictHeatingUnit(unit) => inputs.district_heating.unit = unit,
            InputUpdate::DistrictHeatingCustomFactors(f) => {
                inputs.district_heating.custom_emission_factors = Some(HeatEmissionFactors {
                    co2: non_negative(f.co2),
                    ch4: non_negative(f.ch4),
                    n2o: non_negative(f.n2o),
                });
            }

            InputUpdate::CityGasAmount(v) => inputs.city_gas.amount = non_negative(v),
            InputUpdate::PropaneAmount(v) => inputs.propane.amount = non_negative(v),
            InputUpdate::LiquidFuelAmount(fuel, v) => {
                let slot = match fuel {
                    LiquidFuel::Diesel => &mut inputs.liquid_fuel.diesel,
                    LiquidFuel::Kerosene => &mut inputs.liquid_fuel.kerosene,
                    LiquidFuel::Gasoline => &mut inputs.liquid_fuel.gasoline,
                };
                slot.amount = non_negative(v);
            }

            InputUpdate::VehicleInputType(mode) => inputs.vehicle.input_type = mode,
            InputUpdate::VehicleFuelAmount(fuel, v) => inputs.vehicle.fuels.get_mut(fuel).amount = non_negative(v),
            InputUpdate::VehicleFuelCost(fuel, v) => inputs.vehicle.fuels.get_mut(fuel).cost = non_negative(v),

            InputUpdate::ElectricVehicleInputType(mode) => inputs.electric_vehicle.input_type = mode,
            InputUpdate::ElectricVehicleAmount(v) => inputs.electric_vehicle.amount = non_negative(v),
            InputUpdate::ElectricVehicleCost(v) => inputs.electric_vehicle.cost = non_negative(v),
            InputUpdate::ElectricVehicleUnit(unit) => inputs.electric_vehicle.unit = unit,
        }
    }

    /// Apply several updates in order
    pub fn apply_all<I: IntoIterator<Item = InputUpdate>>(&mut self, updates: I) {
        for update in updates {
            self.apply(update);
        }
    }

    /// Compute results for the current inputs
    ///
    /// Returns the cached result when the inputs are unchanged since the
    /// last call.
    pub fn recompute(&mut self) -> &CalculationResult {
        let entry = match self.cached.take() {
            Some((snapshot, result)) if snapshot == self.inputs => (snapshot, result),
            _ => {
                tracing::debug!("Inputs changed, recomputing");
                (self.inputs.clone(), calculate_total_emissions(&self.inputs))
            }
        };

        let (_, result) = self.cached.insert(entry);
        result
    }

    /// Whether results should be displayed
    pub fn is_result_visible(&self) -> bool {
        has_any_input_value(&self.inputs)
    }

    /// Return inputs to zero defaults and drop the cached result
    pub fn reset(&mut self) {
        tracing::info!("Resetting calculator inputs");
        self.inputs.reset();
        self.cached = None;
    }
}
