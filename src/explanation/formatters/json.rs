use serde::Serialize;

use crate::aggregator::CalculationResult;
use crate::explanation::types::CalculationExplanation;

/// JSON formatter for breakdowns
pub struct JsonFormatter;

/// Result and breakdown in one document, as the command line prints it
#[derive(Serialize)]
struct Report<'a> {
    result: &'a CalculationResult,
    breakdown: &'a CalculationExplanation,
}

impl JsonFormatter {
    /// Breakdown only, pretty-printed
    pub fn format(explanation: &CalculationExplanation) -> serde_json::Result<String> {
        serde_json::to_string_pretty(explanation)
    }

    /// Breakdown only, single line
    pub fn format_compact(explanation: &CalculationExplanation) -> serde_json::Result<String> {
        serde_json::to_string(explanation)
    }

    /// Section results and totals followed by their breakdown, pretty-printed
    pub fn format_report(result: &CalculationResult, explanation: &CalculationExplanation) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Report {
            result,
            breakdown: explanation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::calculate_total_emissions;
    use crate::explanation::BreakdownGenerator;
    use crate::inputs::{ActivityInputs, Industry};

    fn sample() -> (CalculationResult, CalculationExplanation) {
        let mut inputs = ActivityInputs::default();
        inputs.industry = Some(Industry::Commercial);
        inputs.city_gas.amount = 1000.0;
        let result = calculate_total_emissions(&inputs);
        let explanation = BreakdownGenerator::generate(&inputs, &result);
        (result, explanation)
    }

    #[test]
    fn test_format_json() {
        let (_, explanation) = sample();
        let json = JsonFormatter::format(&explanation).unwrap();

        assert!(json.contains("\"section\": \"city_gas\""));
        assert!(json.contains("\"scope\": \"direct\""));
        assert!(json.contains("\"gas\": \"CH4\""));
        assert!(json.contains("\"industry\": \"Commercial / public\""));
    }

    #[test]
    fn test_format_compact() {
        let (_, explanation) = sample();
        let json = JsonFormatter::format_compact(&explanation).unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains("\"method\":null"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totals"]["direct"], explanation.totals.direct);
    }

    #[test]
    fn test_format_report() {
        let (result, explanation) = sample();
        let json = JsonFormatter::format_report(&result, &explanation).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["result"]["cityGas"]["emissions"], result.sections.city_gas.emissions);
        assert_eq!(value["result"]["cityGas"]["type"], "direct");
        assert_eq!(value["result"]["totals"]["total"]["market"], result.totals.total.market);
        assert_eq!(value["breakdown"]["sections"][0]["section"], "city_gas");
    }
}
