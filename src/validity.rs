//! Input presence check
//!
//! Decides whether the presentation layer should show results. Has no
//! effect on the arithmetic.

use crate::factors::VehicleFuel;
use crate::inputs::ActivityInputs;

/// True iff an industry is chosen and at least one activity is non-zero
///
/// Only the field matching each section's input mode counts.
pub fn has_any_input_value(inputs: &ActivityInputs) -> bool {
    if inputs.industry.is_none() {
        return false;
    }

    let liquid = &inputs.liquid_fuel;

    inputs.electricity.effective_total() > 0.0
        || inputs.district_heating.amount > 0.0
        || inputs.city_gas.amount > 0.0
        || inputs.propane.amount > 0.0
        || liquid.diesel.amount > 0.0
        || liquid.kerosene.amount > 0.0
        || liquid.gasoline.amount > 0.0
        || VehicleFuel::ALL.iter().any(|fuel| inputs.vehicle.active_value(*fuel) > 0.0)
        || inputs.electric_vehicle.active_value() > 0.0
}
