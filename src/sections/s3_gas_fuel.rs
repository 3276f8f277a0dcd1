//! SECTION 3: GASEOUS FUELS (CITY GAS, PROPANE)
//!
//! Stationary combustion, direct emissions. CH4 factor depends on the
//! industry group (1 for energy/manufacturing, 5 otherwise).
//!
//! - City gas: Nm³ → thousand m³, heating value 38.9, CO2 56,100 kg/TJ
//! - Propane: kg used as entered, heating value 46.3, CO2 63,100 kg/TJ

use super::{combustion_component, EmissionScope, EmissionSource, SectionResult};
use crate::factors::{stationary_factors, IndustryGroup, StationaryFuel};
use crate::inputs::Industry;
use crate::utils::round2;

/// Calculate city gas (LNG) emissions from Nm³
pub fn calculate_city_gas(amount: f64, industry: Option<Industry>) -> SectionResult {
    let amount_thousand_m3 = amount / 1000.0;
    gas_fuel_section(StationaryFuel::CityGas, amount_thousand_m3, "thousand m³", industry)
}

/// Calculate propane emissions from kg
pub fn calculate_propane(amount: f64, industry: Option<Industry>) -> SectionResult {
    gas_fuel_section(StationaryFuel::Propane, amount, "kg", industry)
}

fn gas_fuel_section(
    fuel: StationaryFuel,
    activity: f64,
    activity_unit: &'static str,
    industry: Option<Industry>,
) -> SectionResult {
    let group = IndustryGroup::from_industry(industry);
    let factors = stationary_factors(fuel, group);
    let component = combustion_component(EmissionSource::Stationary(fuel), activity, activity_unit, factors);

    SectionResult {
        emissions: round2(component.co2e),
        scope: EmissionScope::Direct,
        components: vec![component],
    }
}
