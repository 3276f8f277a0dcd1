//! SECTION 6: ELECTRIC VEHICLES
//!
//! Charging is grid consumption, so it is indirect and uses the grid
//! electricity formula. Spend converts to kWh at 324.4 per kWh.

use super::{grid_component, EmissionScope, EmissionSource, SectionResult};
use crate::error::Result;
use crate::factors::ELECTRICITY_PRICE_PER_KWH;
use crate::inputs::InputMode;
use crate::utils::{cost_to_volume, kwh_to_mwh, round2, to_mwh, ElectricityUnit};

/// Calculate electric vehicle charging emissions
pub fn calculate_electric_vehicle(
    amount: f64,
    cost: f64,
    input_type: InputMode,
    unit: ElectricityUnit,
) -> Result<SectionResult> {
    let usage_mwh = match input_type {
        InputMode::Cost => kwh_to_mwh(cost_to_volume(cost, ELECTRICITY_PRICE_PER_KWH, "electricity")?),
        InputMode::Volume => to_mwh(amount, unit),
    };

    let component = grid_component(EmissionSource::ElectricVehicle, usage_mwh);

    Ok(SectionResult {
        emissions: round2(component.co2e),
        scope: EmissionScope::Indirect,
        components: vec![component],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::calculate_electricity;
    use approx::assert_relative_eq;

    #[test]
    fn test_volume_matches_grid_electricity() {
        let ev = calculate_electric_vehicle(20_000.0, 0.0, InputMode::Volume, ElectricityUnit::Kwh).unwrap();
        let grid = calculate_electricity(20_000.0, 0.0, false, ElectricityUnit::Kwh);
        assert_eq!(ev.emissions, grid.location);
        assert_eq!(ev.scope, EmissionScope::Indirect);
    }

    #[test]
    fn test_cost_mode() {
        // 3,244,000 / 324.4 = 10,000 kWh = 10 MWh
        let ev = calculate_electric_vehicle(0.0, 3_244_000.0, InputMode::Cost, ElectricityUnit::Kwh).unwrap();
        assert_relative_eq!(ev.components[0].activity, 10.0, epsilon = 1e-9);
        assert_eq!(ev.emissions, 4.59);
    }

    #[test]
    fn test_cost_mode_ignores_amount_and_unit() {
        let a = calculate_electric_vehicle(123.0, 50_000.0, InputMode::Cost, ElectricityUnit::Mwh).unwrap();
        let b = calculate_electric_vehicle(0.0, 50_000.0, InputMode::Cost, ElectricityUnit::Kwh).unwrap();
        assert_eq!(a, b);
    }
}
