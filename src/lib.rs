//! Site Emissions Calculator
//!
//! Greenhouse gas inventory for a single reporting site: converts activity
//! data (electricity, purchased heat, stationary fuels, vehicles) into tonnes
//! of CO2-equivalent using fixed national emission factors and IPCC SAR
//! global warming potentials.
//!
//! Module layout:
//! - `utils/`: Unit conversion and rounding
//! - `factors/`: Emission factor tables, GWPs, conversion prices
//! - `sections/`: One calculator per activity category
//! - `aggregator`: Direct / indirect and location / market totals
//! - `validity`: Whether any input is present
//! - `session`: Owned input state with explicit recompute
//! - `explanation/`: Per-section arithmetic breakdowns and formatters

pub mod utils;
pub mod error;
pub mod factors;
pub mod inputs;
pub mod sections;
pub mod aggregator;
pub mod validity;
pub mod session;
pub mod explanation;

// Re-export commonly used types
pub use error::{CalculationError, Result};
pub use inputs::{ActivityInputs, Industry, InputMode};
pub use aggregator::{
    calculate_sites, calculate_sites_parallel, calculate_total_emissions, CalculationResult,
    EmissionTotals, MethodTotals, SectionResults,
};
pub use validity::has_any_input_value;
pub use session::{CalculatorSession, InputUpdate, LiquidFuel};
pub use explanation::{BreakdownGenerator, CalculationExplanation, JsonFormatter, MarkdownFormatter};
pub use sections::{ElectricityResult, EmissionComponent, EmissionScope, GasEmissions, SectionResult};
