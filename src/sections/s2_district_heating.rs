//! SECTION 2: DISTRICT HEATING (PURCHASED HEAT / STEAM)
//!
//! emissions = (TJ × CO2 × 1 + TJ × CH4 × 21 + TJ × N2O × 310) / 1000
//!
//! Factors are kg/TJ per supplier. For "others" the site supplies its own
//! factors; if they are missing, a flat 0.0512 tCO2e/Mcal factor is used
//! instead of failing the section.

use super::{EmissionComponent, EmissionScope, EmissionSource, FactorsUsed, GasEmissions, SectionResult};
use crate::error::CalculationError;
use crate::factors::district_heating::MCAL_PER_MWH;
use crate::factors::{
    DistrictHeatingProvider, HeatEmissionFactors, GWP_CH4, GWP_CO2, GWP_N2O, OTHERS_FLAT_FACTOR,
};
use crate::utils::{heat_to_tj, round2, HeatUnit};

/// Calculate district heating emissions
pub fn calculate_district_heating(
    amount: f64,
    provider: DistrictHeatingProvider,
    unit: HeatUnit,
    custom_factors: Option<&HeatEmissionFactors>,
) -> SectionResult {
    let factors = match provider.factors() {
        Some(builtin) => builtin,
        None => match custom_factors {
            Some(custom) => *custom,
            None => {
                tracing::warn!("{}; using flat {} tCO2e/Mcal", CalculationError::MissingCustomFactors, OTHERS_FLAT_FACTOR);
                return flat_fallback(amount, provider, unit);
            }
        },
    };

    // STEP 1: Convert to TJ
    let amount_tj = heat_to_tj(amount, unit);

    // STEP 2: kg per gas (GWP-weighted), summed before the kg → t conversion
    let co2_kg = amount_tj * factors.co2 * GWP_CO2;
    let ch4_kg = amount_tj * factors.ch4 * GWP_CH4;
    let n2o_kg = amount_tj * factors.n2o * GWP_N2O;
    let total_t = (co2_kg + ch4_kg + n2o_kg) / 1000.0;

    let component = EmissionComponent {
        source: EmissionSource::DistrictHeating(provider),
        activity: amount_tj,
        activity_unit: "TJ",
        factors: FactorsUsed::Heat(factors),
        gases: Some(GasEmissions {
            co2: co2_kg / 1000.0,
            ch4: ch4_kg / 1000.0,
            n2o: n2o_kg / 1000.0,
        }),
        co2e: total_t,
    };

    SectionResult {
        emissions: round2(total_t),
        scope: EmissionScope::Indirect,
        components: vec![component],
    }
}

/// Flat Mcal-based estimate for "others" without custom factors
///
/// MWh is converted at 0.86 Mcal/MWh; any other unit is taken as Mcal.
fn flat_fallback(amount: f64, provider: DistrictHeatingProvider, unit: HeatUnit) -> SectionResult {
    let amount_mcal = match unit {
        HeatUnit::Mwh => amount * MCAL_PER_MWH,
        HeatUnit::Mcal | HeatUnit::Mj => amount,
    };
    let total_t = amount_mcal * OTHERS_FLAT_FACTOR;

    SectionResult {
        emissions: round2(total_t),
        scope: EmissionScope::Indirect,
        components: vec![EmissionComponent {
            source: EmissionSource::DistrictHeating(provider),
            activity: amount_mcal,
            activity_unit: "Mcal",
            factors: FactorsUsed::FlatHeat(OTHERS_FLAT_FACTOR),
            gases: None,
            co2e: total_t,
        }],
    }
}
