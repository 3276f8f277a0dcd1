//! Emissions Aggregator - Main coordinator for a site calculation
//!
//! Runs every section calculator over one `ActivityInputs` and combines the
//! section results into direct / indirect and location / market totals.
//! Includes a parallel (Rayon) entry point for batches of independent sites.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::inputs::ActivityInputs;
use crate::sections::*;
use crate::utils::round2;

/// Location-based and market-based pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MethodTotals {
    pub location: f64,
    pub market: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EmissionTotals {
    pub direct: f64,
    pub indirect: MethodTotals,
    pub total: MethodTotals,
}

/// Every section result for one site
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResults {
    pub electricity: ElectricityResult,
    pub district_heating: SectionResult,
    pub city_gas: SectionResult,
    pub propane: SectionResult,
    pub liquid_fuel: SectionResult,
    pub vehicle: SectionResult,
    pub electric_vehicle: SectionResult,
}

/// Full calculation result, recomputed from scratch on every input change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    #[serde(flatten)]
    pub sections: SectionResults,
    pub totals: EmissionTotals,
}

/// Combine section results into totals
///
/// Direct = city gas + propane + liquid fuel + vehicle.
/// Indirect = electric vehicle + electricity + district heating, with the
/// location- or market-based electricity figure.
/// Sums use the already-rounded section values and are rounded again.
pub fn aggregate(sections: &SectionResults) -> EmissionTotals {
    let direct = sections.city_gas.emissions
        + sections.propane.emissions
        + sections.liquid_fuel.emissions
        + sections.vehicle.emissions;

    let indirect_location = sections.electric_vehicle.emissions
        + sections.electricity.location
        + sections.district_heating.emissions;
    let indirect_market = sections.electric_vehicle.emissions
        + sections.electricity.market
        + sections.district_heating.emissions;

    EmissionTotals {
        direct: round2(direct),
        indirect: MethodTotals {
            location: round2(indirect_location),
            market: round2(indirect_market),
        },
        total: MethodTotals {
            location: round2(direct + indirect_location),
            market: round2(direct + indirect_market),
        },
    }
}

/// Keep a failed section from aborting the others
///
/// The failure is logged and the section reports zero emissions.
pub fn section_or_empty(section: &str, result: Result<SectionResult>, scope: EmissionScope) -> SectionResult {
    result.unwrap_or_else(|err| {
        tracing::warn!("{} section skipped: {}", section, err);
        SectionResult::empty(scope)
    })
}

/// Run all sections for one site
pub fn calculate_sections(inputs: &ActivityInputs) -> SectionResults {
    let electricity = &inputs.electricity;
    let heating = &inputs.district_heating;
    let liquid = &inputs.liquid_fuel;
    let ev = &inputs.electric_vehicle;

    let sections = SectionResults {
        electricity: calculate_electricity(
            electricity.effective_total(),
            electricity.renewable,
            electricity.has_renewable,
            electricity.unit,
        ),
        district_heating: calculate_district_heating(
            heating.amount,
            heating.provider,
            heating.unit,
            heating.custom_emission_factors.as_ref(),
        ),
        city_gas: calculate_city_gas(inputs.city_gas.amount, inputs.industry),
        propane: calculate_propane(inputs.propane.amount, inputs.industry),
        liquid_fuel: calculate_liquid_fuel(
            liquid.diesel.amount,
            liquid.kerosene.amount,
            liquid.gasoline.amount,
            inputs.industry,
        ),
        vehicle: section_or_empty(
            "vehicle",
            calculate_vehicle(&inputs.vehicle.fuels, inputs.vehicle.input_type),
            EmissionScope::Direct,
        ),
        electric_vehicle: section_or_empty(
            "electric vehicle",
            calculate_electric_vehicle(ev.amount, ev.cost, ev.input_type, ev.unit),
            EmissionScope::Indirect,
        ),
    };

    tracing::debug!(
        "Section emissions (tCO2e): electricity={:.2}/{:.2}, district_heating={:.2}, city_gas={:.2}, propane={:.2}, liquid_fuel={:.2}, vehicle={:.2}, electric_vehicle={:.2}",
        sections.electricity.location,
        sections.electricity.market,
        sections.district_heating.emissions,
        sections.city_gas.emissions,
        sections.propane.emissions,
        sections.liquid_fuel.emissions,
        sections.vehicle.emissions,
        sections.electric_vehicle.emissions,
    );

    sections
}

/// Calculate every section and the totals for one site
pub fn calculate_total_emissions(inputs: &ActivityInputs) -> CalculationResult {
    let sections = calculate_sections(inputs);
    let totals = aggregate(&sections);
    CalculationResult { sections, totals }
}

/// Calculate a batch of independent sites sequentially
pub fn calculate_sites(sites: &[ActivityInputs]) -> Vec<CalculationResult> {
    sites.iter().map(calculate_total_emissions).collect()
}

/// Calculate a batch of independent sites IN PARALLEL
///
/// Sites share nothing, so each runs on whichever Rayon worker picks it up.
/// Results come back in input order.
pub fn calculate_sites_parallel(sites: &[ActivityInputs]) -> Vec<CalculationResult> {
    tracing::debug!("Calculating {} sites in parallel", sites.len());
    sites.par_iter().map(calculate_total_emissions).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculationError;
    use crate::inputs::Industry;
    use approx::assert_relative_eq;

    fn sample_inputs() -> ActivityInputs {
        let mut inputs = ActivityInputs::default();
        inputs.industry = Some(Industry::Energy);
        inputs.electricity.total = 100.0;
        inputs.city_gas.amount = 1000.0;
        inputs.district_heating.provider = crate::factors::DistrictHeatingProvider::National;
        inputs.district_heating.amount = 1000.0;
        inputs
    }

    #[test]
    fn test_all_zero_inputs_give_zero_totals() {
        let result = calculate_total_emissions(&ActivityInputs::default());
        assert_eq!(result.totals, EmissionTotals::default());
    }

    #[test]
    fn test_totals() {
        let result = calculate_total_emissions(&sample_inputs());
        assert_eq!(result.sections.electricity.location, 45.94);
        assert_eq!(result.sections.city_gas.emissions, 2.18);
        assert_eq!(result.sections.district_heating.emissions, 0.25);

        assert_eq!(result.totals.direct, 2.18);
        assert_eq!(result.totals.indirect.location, 46.19);
        assert_eq!(result.totals.indirect.market, 46.19);
        assert_eq!(result.totals.total.location, 48.37);
        assert_eq!(result.totals.total.market, 48.37);
    }

    #[test]
    fn test_market_below_location_with_renewables() {
        let mut inputs = sample_inputs();
        inputs.electricity.has_renewable = true;
        inputs.electricity.renewable = 40.0;
        inputs.electricity.conventional = 60.0;

        let result = calculate_total_emissions(&inputs);
        let t = result.totals;
        assert!(t.indirect.market < t.indirect.location);
        assert_relative_eq!(t.total.location - t.total.market, 45.94 - 27.56, epsilon = 1e-9);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sites: Vec<ActivityInputs> = (0..16)
            .map(|i| {
                let mut inputs = sample_inputs();
                inputs.city_gas.amount = 250.0 * i as f64;
                inputs.electricity.total = 10.0 * i as f64;
                inputs
            })
            .collect();

        let sequential = calculate_sites(&sites);
        let parallel = calculate_sites_parallel(&sites);
        assert_eq!(sequential.len(), parallel.len());
        for (s, p) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(s, p);
        }
    }

    #[test]
    fn test_failed_section_does_not_abort_others() {
        let failed = Err(CalculationError::InvalidPrice { fuel: "gasoline", price: 0.0 });
        let section = section_or_empty("vehicle", failed, EmissionScope::Direct);
        assert_eq!(section, SectionResult::empty(EmissionScope::Direct));

        let mut sections = calculate_sections(&sample_inputs());
        sections.vehicle = section;
        let totals = aggregate(&sections);
        assert_eq!(totals.direct, 2.18);
        assert_eq!(totals.total.location, 48.37);
    }
}
