use super::fmt_activity;
use crate::explanation::types::{
    AccountingMethod, BreakdownLine, Gas, Quantity, SectionBreakdown, SectionKind, SourceBreakdown,
};
use crate::factors::{ELECTRICITY_PRICE_PER_KWH, GWP_CH4, GWP_CO2, GWP_N2O};
use crate::inputs::{DistrictHeatingInputs, ElectricVehicleInputs, ElectricityInputs, InputMode};
use crate::sections::{ElectricityResult, EmissionComponent, FactorsUsed, SectionResult};
use crate::utils::ElectricityUnit;

/// Per-gas lines for grid electricity
pub fn grid_lines(component: &EmissionComponent) -> Vec<BreakdownLine> {
    let (FactorsUsed::Grid(f), Some(gases)) = (&component.factors, component.gases) else {
        return Vec::new();
    };
    let mwh = fmt_activity(component.activity);

    vec![
        BreakdownLine {
            gas: Gas::Co2,
            formula: format!("{} MWh × {} tCO2/MWh", mwh, f.co2),
            value: gases.co2,
        },
        BreakdownLine {
            gas: Gas::Ch4,
            formula: format!("{} MWh × {} kgCH4/MWh ÷ 1000 × {}", mwh, f.ch4, GWP_CH4),
            value: gases.ch4,
        },
        BreakdownLine {
            gas: Gas::N2o,
            formula: format!("{} MWh × {} kgN2O/MWh ÷ 1000 × {}", mwh, f.n2o, GWP_N2O),
            value: gases.n2o,
        },
    ]
}

/// Per-gas lines for district heating, or one CO2e line for the flat fallback
pub fn heat_lines(component: &EmissionComponent) -> Vec<BreakdownLine> {
    let activity = fmt_activity(component.activity);

    match (&component.factors, component.gases) {
        (FactorsUsed::Heat(f), Some(gases)) => vec![
            BreakdownLine {
                gas: Gas::Co2,
                formula: format!("{} TJ × {} kg/TJ × {} ÷ 1000", activity, f.co2, GWP_CO2),
                value: gases.co2,
            },
            BreakdownLine {
                gas: Gas::Ch4,
                formula: format!("{} TJ × {} kg/TJ × {} ÷ 1000", activity, f.ch4, GWP_CH4),
                value: gases.ch4,
            },
            BreakdownLine {
                gas: Gas::N2o,
                formula: format!("{} TJ × {} kg/TJ × {} ÷ 1000", activity, f.n2o, GWP_N2O),
                value: gases.n2o,
            },
        ],
        (FactorsUsed::FlatHeat(factor), _) => vec![BreakdownLine {
            gas: Gas::Co2e,
            formula: format!("{} Mcal × {} tCO2e/Mcal", activity, factor),
            value: component.co2e,
        }],
        _ => Vec::new(),
    }
}

/// MWh conversion, omitted when the value was already entered in MWh
fn mwh_conversion(unit: ElectricityUnit, mwh: f64) -> Option<Quantity> {
    match unit {
        ElectricityUnit::Mwh => None,
        ElectricityUnit::Kwh => Some(Quantity::new(mwh, "MWh")),
    }
}

/// Generate breakdown for grid electricity under one accounting method
///
/// Market-based counts only the conventional share when renewables are
/// declared; otherwise both methods show the same arithmetic.
pub fn generate_electricity_fragment(
    input: &ElectricityInputs,
    result: &ElectricityResult,
    method: AccountingMethod,
) -> SectionBreakdown {
    let (label, entered, component, total) = match method {
        AccountingMethod::LocationBased => (
            "Total consumption",
            input.effective_total(),
            &result.location_component,
            result.location,
        ),
        AccountingMethod::MarketBased if input.has_renewable => (
            "Conventional consumption (renewables excluded)",
            input.effective_conventional(),
            &result.market_component,
            result.market,
        ),
        AccountingMethod::MarketBased => (
            "Total consumption",
            input.effective_total(),
            &result.market_component,
            result.market,
        ),
    };

    SectionBreakdown {
        section: SectionKind::Electricity,
        title: format!("{} ({})", SectionKind::Electricity.title(), method.label()),
        scope: result.scope,
        method: Some(method),
        sources: vec![SourceBreakdown {
            label: label.to_string(),
            input: Quantity::new(entered, input.unit.as_str()),
            converted: mwh_conversion(input.unit, component.activity),
            lines: grid_lines(component),
            subtotal: component.co2e,
        }],
        total,
    }
}

/// Generate breakdown for district heating
pub fn generate_district_heating_fragment(input: &DistrictHeatingInputs, result: &SectionResult) -> SectionBreakdown {
    let sources = result
        .components
        .iter()
        .map(|c| {
            let label = match c.factors {
                FactorsUsed::FlatHeat(_) => format!("{} (flat factor, no custom factors given)", input.provider.display_name()),
                _ => input.provider.display_name().to_string(),
            };
            SourceBreakdown {
                label,
                input: Quantity::new(input.amount, input.unit.as_str()),
                converted: Some(Quantity::new(c.activity, c.activity_unit)),
                lines: heat_lines(c),
                subtotal: c.co2e,
            }
        })
        .collect();

    SectionBreakdown {
        section: SectionKind::DistrictHeating,
        title: SectionKind::DistrictHeating.title().to_string(),
        scope: result.scope,
        method: None,
        sources,
        total: result.emissions,
    }
}

/// Generate breakdown for electric vehicle charging
pub fn generate_electric_vehicle_fragment(input: &ElectricVehicleInputs, result: &SectionResult) -> SectionBreakdown {
    let sources = result
        .components
        .iter()
        .map(|c| {
            let (label, quantity, converted) = match input.input_type {
                InputMode::Volume => (
                    "Charging electricity".to_string(),
                    Quantity::new(input.amount, input.unit.as_str()),
                    mwh_conversion(input.unit, c.activity),
                ),
                InputMode::Cost => (
                    format!("Charging spend (at {} KRW/kWh)", ELECTRICITY_PRICE_PER_KWH),
                    Quantity::new(input.cost, "KRW"),
                    Some(Quantity::new(c.activity, "MWh")),
                ),
            };
            SourceBreakdown {
                label,
                input: quantity,
                converted,
                lines: grid_lines(c),
                subtotal: c.co2e,
            }
        })
        .collect();

    SectionBreakdown {
        section: SectionKind::ElectricVehicle,
        title: SectionKind::ElectricVehicle.title().to_string(),
        scope: result.scope,
        method: None,
        sources,
        total: result.emissions,
    }
}
