//! SECTION 1: GRID ELECTRICITY
//!
//! Dual Scope 2 accounting:
//! - Location-based: grid-average factor on total consumption, renewables
//!   included
//! - Market-based: same factor on conventional consumption only, renewables
//!   count as zero
//!
//! Without a renewable share both conventions give the same number.

use serde::Serialize;

use super::{grid_component, EmissionComponent, EmissionScope, EmissionSource};
use crate::utils::{round2, to_mwh, ElectricityUnit};

/// Result of the electricity section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectricityResult {
    /// Location-based tCO2e (2 dp)
    pub location: f64,
    /// Market-based tCO2e (2 dp)
    pub market: f64,
    #[serde(rename = "type")]
    pub scope: EmissionScope,
    /// Formula applied to total consumption
    pub location_component: EmissionComponent,
    /// Formula applied to the consumption counted under market-based rules
    pub market_component: EmissionComponent,
}

/// Calculate grid electricity emissions
///
/// `total_usage` is the effective total (renewable + conventional when the
/// renewable toggle is on).
pub fn calculate_electricity(
    total_usage: f64,
    renewable_usage: f64,
    has_renewable: bool,
    unit: ElectricityUnit,
) -> ElectricityResult {
    // STEP 1: Normalize to MWh
    let total_mwh = to_mwh(total_usage, unit);
    let renewable_mwh = to_mwh(renewable_usage, unit);

    // STEP 2: Market-based counts only conventional supply when renewables are declared
    let market_mwh = if has_renewable {
        (total_mwh - renewable_mwh).max(0.0)
    } else {
        total_mwh
    };

    let location_component = grid_component(EmissionSource::GridElectricity, total_mwh);
    let market_component = grid_component(EmissionSource::GridElectricity, market_mwh);

    ElectricityResult {
        location: round2(location_component.co2e),
        market: round2(market_component.co2e),
        scope: EmissionScope::Indirect,
        location_component,
        market_component,
    }
}
