use crate::explanation::types::{CalculationExplanation, SectionBreakdown, SourceBreakdown};

/// Markdown formatter for breakdowns
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format breakdown as markdown
    ///
    /// Gas lines show 3 decimals, section and overall totals 2.
    pub fn format(explanation: &CalculationExplanation) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str("# Greenhouse Gas Emissions\n\n");
        if let Some(industry) = &explanation.industry {
            md.push_str(&format!("**Industry:** {}\n\n", industry));
        }

        // Totals
        let totals = &explanation.totals;
        md.push_str("## Totals (tCO2e)\n\n");
        md.push_str("| | Location-based | Market-based |\n");
        md.push_str("|---|---:|---:|\n");
        md.push_str(&format!("| Direct | {:.2} | {:.2} |\n", totals.direct, totals.direct));
        md.push_str(&format!(
            "| Indirect | {:.2} | {:.2} |\n",
            totals.indirect.location, totals.indirect.market
        ));
        md.push_str(&format!(
            "| **Total** | **{:.2}** | **{:.2}** |\n\n",
            totals.total.location, totals.total.market
        ));

        // Sections
        if !explanation.sections.is_empty() {
            md.push_str("## Breakdown by Section\n\n");
            for section in &explanation.sections {
                Self::format_section(&mut md, section);
            }
        }

        // Notes
        md.push_str("## Emission Types\n\n");
        for note in &explanation.scope_notes {
            md.push_str(&format!("- **{}:** {}\n", note.title, note.message));
        }
        md.push('\n');

        md.push_str("## Electricity Accounting Methods\n\n");
        for note in &explanation.method_notes {
            md.push_str(&format!("- **{}:** {}\n", note.title, note.message));
        }

        md
    }

    fn format_section(md: &mut String, section: &SectionBreakdown) {
        md.push_str(&format!("### {}\n\n", section.title));
        md.push_str(&format!("*{}*\n\n", section.scope.label()));

        for source in &section.sources {
            Self::format_source(md, source);
        }

        md.push_str(&format!("**Section total:** {:.2} tCO2e\n\n", section.total));
    }

    fn format_source(md: &mut String, source: &SourceBreakdown) {
        md.push_str(&format!("**{}**\n\n", source.label));

        md.push_str(&format!("- Input: {} {}\n", source.input.value, source.input.unit));
        if let Some(converted) = &source.converted {
            md.push_str(&format!("- Converted: {} {}\n", converted.value, converted.unit));
        }
        for line in &source.lines {
            md.push_str(&format!(
                "- {}: {} = {:.3} tCO2e\n",
                line.gas.symbol(),
                line.formula,
                line.value
            ));
        }
        md.push_str(&format!("- Subtotal: {:.3} tCO2e\n\n", source.subtotal));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::calculate_total_emissions;
    use crate::explanation::BreakdownGenerator;
    use crate::inputs::{ActivityInputs, Industry};

    #[test]
    fn test_format_markdown() {
        let mut inputs = ActivityInputs::default();
        inputs.industry = Some(Industry::Energy);
        inputs.electricity.total = 100.0;
        inputs.city_gas.amount = 1000.0;
        let result = calculate_total_emissions(&inputs);
        let md = MarkdownFormatter::format(&BreakdownGenerator::generate(&inputs, &result));

        assert!(md.contains("# Greenhouse Gas Emissions"));
        assert!(md.contains("**Industry:** Energy industries"));
        assert!(md.contains("| **Total** | **48.12** | **48.12** |"));
        assert!(md.contains("### Electricity (Location-based)"));
        assert!(md.contains("### Electricity (Market-based)"));
        assert!(md.contains("- CO2: 100 MWh × 0.4567 tCO2/MWh = 45.670 tCO2e"));
        assert!(md.contains("**Section total:** 2.18 tCO2e"));
        assert!(md.contains("## Electricity Accounting Methods"));
    }

    #[test]
    fn test_no_sections_heading_when_empty() {
        let inputs = ActivityInputs::default();
        let result = calculate_total_emissions(&inputs);
        let md = MarkdownFormatter::format(&BreakdownGenerator::generate(&inputs, &result));

        assert!(!md.contains("## Breakdown by Section"));
        assert!(!md.contains("**Industry:**"));
        assert!(md.contains("| **Total** | **0.00** | **0.00** |"));
    }
}
