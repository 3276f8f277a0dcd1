use super::fmt_activity;
use crate::explanation::types::{
    BreakdownLine, Gas, Quantity, SectionBreakdown, SectionKind, SourceBreakdown,
};
use crate::factors::{StationaryFuel, GWP_CH4, GWP_N2O};
use crate::inputs::{AmountInput, InputMode, LiquidFuelInputs, VehicleInputs};
use crate::sections::{EmissionComponent, EmissionSource, FactorsUsed, SectionResult};

/// Per-gas lines for a combustion component
///
/// CO2 = activity × heating value × kg CO2/TJ × 10⁻⁶
/// CH4 = activity × heating value × kg CH4/TJ × 10⁻⁶ × 21
/// N2O = activity × heating value × kg N2O/TJ × 10⁻⁶ × 310
pub fn combustion_lines(component: &EmissionComponent) -> Vec<BreakdownLine> {
    let (FactorsUsed::Combustion(f), Some(gases)) = (&component.factors, component.gases) else {
        return Vec::new();
    };
    let activity = format!("{} {}", fmt_activity(component.activity), component.activity_unit);

    vec![
        BreakdownLine {
            gas: Gas::Co2,
            formula: format!("{} × {} × {} kg/TJ × 10⁻⁶", activity, f.co2_heat_coefficient, f.co2),
            value: gases.co2,
        },
        BreakdownLine {
            gas: Gas::Ch4,
            formula: format!(
                "{} × {} × {} kg/TJ × 10⁻⁶ × {}",
                activity, f.non_co2_heat_coefficient, f.ch4, GWP_CH4
            ),
            value: gases.ch4,
        },
        BreakdownLine {
            gas: Gas::N2o,
            formula: format!(
                "{} × {} × {} kg/TJ × 10⁻⁶ × {}",
                activity, f.non_co2_heat_coefficient, f.n2o, GWP_N2O
            ),
            value: gases.n2o,
        },
    ]
}

fn section(kind: SectionKind, result: &SectionResult, sources: Vec<SourceBreakdown>) -> SectionBreakdown {
    SectionBreakdown {
        section: kind,
        title: kind.title().to_string(),
        scope: result.scope,
        method: None,
        sources,
        total: result.emissions,
    }
}

/// Generate breakdown for city gas (Nm³ → thousand m³)
pub fn generate_city_gas_fragment(input: &AmountInput, result: &SectionResult) -> SectionBreakdown {
    let sources = result
        .components
        .iter()
        .map(|c| SourceBreakdown {
            label: StationaryFuel::CityGas.label().to_string(),
            input: Quantity::new(input.amount, "Nm³"),
            converted: Some(Quantity::new(c.activity, c.activity_unit)),
            lines: combustion_lines(c),
            subtotal: c.co2e,
        })
        .collect();

    section(SectionKind::CityGas, result, sources)
}

/// Generate breakdown for propane (kg, used as entered)
pub fn generate_propane_fragment(input: &AmountInput, result: &SectionResult) -> SectionBreakdown {
    let sources = result
        .components
        .iter()
        .map(|c| SourceBreakdown {
            label: StationaryFuel::Propane.label().to_string(),
            input: Quantity::new(input.amount, "kg"),
            converted: None,
            lines: combustion_lines(c),
            subtotal: c.co2e,
        })
        .collect();

    section(SectionKind::Propane, result, sources)
}

/// Generate breakdown for stationary liquid fuels, one source per fuel used
pub fn generate_liquid_fuel_fragment(input: &LiquidFuelInputs, result: &SectionResult) -> SectionBreakdown {
    let sources = result
        .components
        .iter()
        .filter_map(|c| {
            let EmissionSource::Stationary(fuel) = c.source else {
                return None;
            };
            let liters = match fuel {
                StationaryFuel::Diesel => input.diesel.amount,
                StationaryFuel::Kerosene => input.kerosene.amount,
                StationaryFuel::Gasoline => input.gasoline.amount,
                StationaryFuel::CityGas | StationaryFuel::Propane => return None,
            };
            Some(SourceBreakdown {
                label: fuel.label().to_string(),
                input: Quantity::new(liters, "L"),
                converted: Some(Quantity::new(c.activity, c.activity_unit)),
                lines: combustion_lines(c),
                subtotal: c.co2e,
            })
        })
        .collect();

    section(SectionKind::LiquidFuel, result, sources)
}

/// Generate breakdown for combustion-engine vehicles
///
/// In cost mode the input is the spend and the label carries the per-liter
/// price it was divided by.
pub fn generate_vehicle_fragment(input: &VehicleInputs, result: &SectionResult) -> SectionBreakdown {
    let sources = result
        .components
        .iter()
        .filter_map(|c| {
            let EmissionSource::Vehicle(fuel) = c.source else {
                return None;
            };
            let (label, quantity) = match input.input_type {
                InputMode::Volume => (fuel.label().to_string(), Quantity::new(input.fuels.get(fuel).amount, "L")),
                InputMode::Cost => (
                    format!("{} (at {} KRW/L)", fuel.label(), fuel.price_per_liter()),
                    Quantity::new(input.fuels.get(fuel).cost, "KRW"),
                ),
            };
            Some(SourceBreakdown {
                label,
                input: quantity,
                converted: Some(Quantity::new(c.activity, c.activity_unit)),
                lines: combustion_lines(c),
                subtotal: c.co2e,
            })
        })
        .collect();

    section(SectionKind::Vehicle, result, sources)
}
