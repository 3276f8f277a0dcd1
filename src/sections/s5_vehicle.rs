//! SECTION 5: COMBUSTION-ENGINE VEHICLES
//!
//! Mobile combustion, direct emissions. Fuels are entered either as liters
//! or as spend; spend is turned into liters at the fixed per-liter price.
//! Coefficients are industry independent.
//!
//! | Fuel     | Heat | CO2    | CH4  | N2O |
//! |----------|------|--------|------|-----|
//! | Gasoline | 30.4 | 69,300 | 25   | 8   |
//! | Diesel   | 35.2 | 74,100 | 3.9  | 3.9 |
//! | LPG      | 45.7 | 63,100 | 62   | 0.2 |

use super::{combustion_component, EmissionScope, EmissionSource, SectionResult};
use crate::error::Result;
use crate::factors::{mobile_factors, VehicleFuel};
use crate::inputs::{InputMode, VehicleFuels};
use crate::utils::{cost_to_volume, liters_to_kiloliters, round2};

/// Calculate vehicle fuel emissions
///
/// Only the field matching `input_type` is read; a fuel whose active value
/// is not positive is skipped.
pub fn calculate_vehicle(fuels: &VehicleFuels, input_type: InputMode) -> Result<SectionResult> {
    let mut components = Vec::new();

    for fuel in VehicleFuel::ALL {
        let entry = fuels.get(fuel);

        let liters = match input_type {
            InputMode::Volume if entry.amount > 0.0 => entry.amount,
            InputMode::Cost if entry.cost > 0.0 => {
                cost_to_volume(entry.cost, fuel.price_per_liter(), fuel.as_str())?
            }
            _ => continue,
        };

        components.push(combustion_component(
            EmissionSource::Vehicle(fuel),
            liters_to_kiloliters(liters),
            "KL",
            mobile_factors(fuel),
        ));
    }

    let total: f64 = components.iter().fold(0.0, |acc, c| acc + c.co2e);

    Ok(SectionResult {
        emissions: round2(total),
        scope: EmissionScope::Direct,
        components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::VehicleFuelInput;
    use approx::assert_relative_eq;

    fn fuels(gasoline: VehicleFuelInput, diesel: VehicleFuelInput, lpg: VehicleFuelInput) -> VehicleFuels {
        VehicleFuels { gasoline, diesel, lpg }
    }

    #[test]
    fn test_gasoline_by_cost() {
        let f = fuels(
            VehicleFuelInput { amount: 0.0, cost: 16467.1 },
            VehicleFuelInput::default(),
            VehicleFuelInput::default(),
        );
        let result = calculate_vehicle(&f, InputMode::Cost).unwrap();
        let component = &result.components[0];
        assert_relative_eq!(component.activity, 0.01, epsilon = 1e-12);
        // 0.0210672 + 0.0001596 + 0.00075392
        assert_relative_eq!(component.co2e, 0.02198072, epsilon = 1e-10);
        assert_eq!(result.emissions, 0.02);
    }

    #[test]
    fn test_cost_and_volume_agree() {
        let by_volume = fuels(
            VehicleFuelInput { amount: 1000.0, cost: 0.0 },
            VehicleFuelInput { amount: 2000.0, cost: 0.0 },
            VehicleFuelInput { amount: 500.0, cost: 0.0 },
        );
        let by_cost = fuels(
            VehicleFuelInput { amount: 0.0, cost: 1000.0 * 1646.71 },
            VehicleFuelInput { amount: 0.0, cost: 2000.0 * 1502.69 },
            VehicleFuelInput { amount: 0.0, cost: 500.0 * 995.25 },
        );
        let v = calculate_vehicle(&by_volume, InputMode::Volume).unwrap();
        let c = calculate_vehicle(&by_cost, InputMode::Cost).unwrap();
        assert_eq!(v.emissions, c.emissions);
    }

    #[test]
    fn test_inactive_field_ignored() {
        // Stale cost data must not leak into volume mode
        let f = fuels(
            VehicleFuelInput { amount: 0.0, cost: 999_999.0 },
            VehicleFuelInput { amount: 100.0, cost: 0.0 },
            VehicleFuelInput::default(),
        );
        let result = calculate_vehicle(&f, InputMode::Volume).unwrap();
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.components[0].source, EmissionSource::Vehicle(VehicleFuel::Diesel));
    }

    #[test]
    fn test_lpg_volume() {
        // 1000 L = 1 KL: 45.7 × 63,100e-6 + 45.7 × 62e-6 × 21 + 45.7 × 0.2e-6 × 310
        let f = fuels(
            VehicleFuelInput::default(),
            VehicleFuelInput::default(),
            VehicleFuelInput { amount: 1000.0, cost: 0.0 },
        );
        let result = calculate_vehicle(&f, InputMode::Volume).unwrap();
        assert_relative_eq!(result.components[0].co2e, 2.8836700 + 0.0595014 + 0.0028334, epsilon = 1e-9);
        assert_eq!(result.emissions, 2.95);
        assert_eq!(result.scope, EmissionScope::Direct);
    }

    #[test]
    fn test_empty() {
        let result = calculate_vehicle(&VehicleFuels::default(), InputMode::Cost).unwrap();
        assert!(result.components.is_empty());
        assert_eq!(result.emissions, 0.0);
    }
}
