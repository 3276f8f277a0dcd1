use crate::aggregator::CalculationResult;
use crate::explanation::fragments::*;
use crate::explanation::types::*;
use crate::inputs::ActivityInputs;
use crate::sections::EmissionScope;

/// Main breakdown generator
pub struct BreakdownGenerator;

impl BreakdownGenerator {
    /// Generate the full breakdown for one calculation
    ///
    /// Only sections with a non-zero active input appear. Electricity
    /// appears twice, once per accounting method. Values are read from
    /// `result`; nothing is recomputed.
    pub fn generate(inputs: &ActivityInputs, result: &CalculationResult) -> CalculationExplanation {
        let sections_in = &result.sections;
        let mut sections = Vec::new();

        if inputs.electricity.effective_total() > 0.0 {
            for method in [AccountingMethod::LocationBased, AccountingMethod::MarketBased] {
                sections.push(generate_electricity_fragment(&inputs.electricity, &sections_in.electricity, method));
            }
        }

        if inputs.district_heating.amount > 0.0 {
            sections.push(generate_district_heating_fragment(&inputs.district_heating, &sections_in.district_heating));
        }

        if inputs.city_gas.amount > 0.0 {
            sections.push(generate_city_gas_fragment(&inputs.city_gas, &sections_in.city_gas));
        }

        if inputs.propane.amount > 0.0 {
            sections.push(generate_propane_fragment(&inputs.propane, &sections_in.propane));
        }

        if !sections_in.liquid_fuel.components.is_empty() {
            sections.push(generate_liquid_fuel_fragment(&inputs.liquid_fuel, &sections_in.liquid_fuel));
        }

        if !sections_in.vehicle.components.is_empty() {
            sections.push(generate_vehicle_fragment(&inputs.vehicle, &sections_in.vehicle));
        }

        if inputs.electric_vehicle.active_value() > 0.0 {
            sections.push(generate_electric_vehicle_fragment(&inputs.electric_vehicle, &sections_in.electric_vehicle));
        }

        tracing::debug!("Generated breakdown with {} sections", sections.len());

        CalculationExplanation {
            industry: inputs.industry.map(|i| i.label().to_string()),
            sections,
            totals: result.totals,
            scope_notes: Self::scope_notes(),
            method_notes: Self::method_notes(),
        }
    }

    fn scope_notes() -> Vec<NoteCard> {
        [EmissionScope::Direct, EmissionScope::Indirect]
            .into_iter()
            .map(|scope| NoteCard {
                title: scope.label().to_string(),
                message: scope.description().to_string(),
            })
            .collect()
    }

    fn method_notes() -> Vec<NoteCard> {
        vec![
            NoteCard {
                title: AccountingMethod::LocationBased.label().to_string(),
                message: "Applies the national grid-average factor to all electricity consumed, renewable supply included.".to_string(),
            },
            NoteCard {
                title: AccountingMethod::MarketBased.label().to_string(),
                message: "Counts only electricity bought from conventional supply; declared renewable electricity is treated as zero-emission.".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::calculate_total_emissions;
    use crate::inputs::Industry;

    #[test]
    fn test_empty_inputs_have_no_sections() {
        let inputs = ActivityInputs::default();
        let result = calculate_total_emissions(&inputs);
        let explanation = BreakdownGenerator::generate(&inputs, &result);
        assert!(explanation.sections.is_empty());
        assert!(explanation.industry.is_none());
        assert_eq!(explanation.scope_notes.len(), 2);
        assert_eq!(explanation.method_notes.len(), 2);
    }

    #[test]
    fn test_sections_follow_inputs() {
        let mut inputs = ActivityInputs::default();
        inputs.industry = Some(Industry::Manufacturing);
        inputs.electricity.total = 100.0;
        inputs.propane.amount = 1000.0;
        let result = calculate_total_emissions(&inputs);
        let explanation = BreakdownGenerator::generate(&inputs, &result);

        let kinds: Vec<_> = explanation.sections.iter().map(|s| (s.section, s.method)).collect();
        assert_eq!(
            kinds,
            vec![
                (SectionKind::Electricity, Some(AccountingMethod::LocationBased)),
                (SectionKind::Electricity, Some(AccountingMethod::MarketBased)),
                (SectionKind::Propane, None),
            ]
        );
        assert_eq!(explanation.totals, result.totals);
        assert_eq!(explanation.industry.as_deref(), Some("Manufacturing / construction"));
    }

    #[test]
    fn test_section_totals_match_result() {
        let mut inputs = ActivityInputs::default();
        inputs.industry = Some(Industry::Energy);
        inputs.city_gas.amount = 1000.0;
        inputs.liquid_fuel.diesel.amount = 1000.0;
        let result = calculate_total_emissions(&inputs);
        let explanation = BreakdownGenerator::generate(&inputs, &result);

        for section in &explanation.sections {
            let expected = match section.section {
                SectionKind::CityGas => result.sections.city_gas.emissions,
                SectionKind::LiquidFuel => result.sections.liquid_fuel.emissions,
                other => panic!("unexpected section {:?}", other),
            };
            assert_eq!(section.total, expected);
        }
    }
}
