pub mod combustion_fragment;
pub mod energy_fragment;

pub use combustion_fragment::{
    generate_city_gas_fragment, generate_liquid_fuel_fragment, generate_propane_fragment,
    generate_vehicle_fragment,
};
pub use energy_fragment::{
    generate_district_heating_fragment, generate_electric_vehicle_fragment,
    generate_electricity_fragment,
};

use crate::utils::round_to;

/// Activity values printed inside formulas
///
/// Seven decimals keep small TJ values (1000 Mcal = 0.0041868 TJ) legible
/// without float noise.
pub(crate) fn fmt_activity(value: f64) -> String {
    format!("{}", round_to(value, 7))
}
