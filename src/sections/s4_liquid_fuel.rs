//! SECTION 4: LIQUID FUELS (DIESEL, KEROSENE, GASOLINE)
//!
//! Stationary combustion, direct emissions. Each fuel with a positive
//! amount is converted L → KL and run through its own formula; the section
//! total is the sum. CH4 factor is 3 for energy/manufacturing, 10 otherwise.
//!
//! Gasoline uses heating value 30.4 for CO2 and 34.2 for CH4/N2O.

use super::{combustion_component, EmissionScope, EmissionSource, SectionResult};
use crate::factors::{stationary_factors, IndustryGroup, StationaryFuel};
use crate::inputs::Industry;
use crate::utils::{liters_to_kiloliters, round2};

/// Calculate liquid fuel emissions from liters of each fuel
pub fn calculate_liquid_fuel(
    diesel_amount: f64,
    kerosene_amount: f64,
    gasoline_amount: f64,
    industry: Option<Industry>,
) -> SectionResult {
    let group = IndustryGroup::from_industry(industry);

    let components: Vec<_> = [
        (StationaryFuel::Diesel, diesel_amount),
        (StationaryFuel::Kerosene, kerosene_amount),
        (StationaryFuel::Gasoline, gasoline_amount),
    ]
    .into_iter()
    .filter(|(_, liters)| *liters > 0.0)
    .map(|(fuel, liters)| {
        combustion_component(
            EmissionSource::Stationary(fuel),
            liters_to_kiloliters(liters),
            "KL",
            stationary_factors(fuel, group),
        )
    })
    .collect();

    let total: f64 = components.iter().fold(0.0, |acc, c| acc + c.co2e);

    SectionResult {
        emissions: round2(total),
        scope: EmissionScope::Direct,
        components,
    }
}
