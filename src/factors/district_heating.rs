//! District Heating Provider Factors
//!
//! Supplier-specific emission factors for purchased heat/steam (kg per TJ).
//! The "others" provider has no built-in factors: the site enters its own.

use serde::{Deserialize, Serialize};

/// Flat tCO2e per Mcal used when "others" is chosen without custom factors
pub const OTHERS_FLAT_FACTOR: f64 = 0.0512;

/// Mcal per MWh, used only by the flat fallback
pub const MCAL_PER_MWH: f64 = 0.86;

/// CO2 / CH4 / N2O factors in kg per TJ
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatEmissionFactors {
    pub co2: f64,
    pub ch4: f64,
    pub n2o: f64,
}

impl HeatEmissionFactors {
    pub const fn new(co2: f64, ch4: f64, n2o: f64) -> Self {
        Self { co2, ch4, n2o }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistrictHeatingProvider {
    #[default]
    Sudogwon,
    Pyeongtaek,
    Cheongju,
    Sejong,
    Daegu,
    Yangsan,
    Gimhae,
    Gwangju,
    National,
    Others,
}

impl DistrictHeatingProvider {
    pub const ALL: [DistrictHeatingProvider; 10] = [
        DistrictHeatingProvider::Sudogwon,
        DistrictHeatingProvider::Pyeongtaek,
        DistrictHeatingProvider::Cheongju,
        DistrictHeatingProvider::Sejong,
        DistrictHeatingProvider::Daegu,
        DistrictHeatingProvider::Yangsan,
        DistrictHeatingProvider::Gimhae,
        DistrictHeatingProvider::Gwangju,
        DistrictHeatingProvider::National,
        DistrictHeatingProvider::Others,
    ];

    /// Built-in factors, `None` for user-supplied ("others")
    pub fn factors(&self) -> Option<HeatEmissionFactors> {
        let f = match self {
            DistrictHeatingProvider::Sudogwon => HeatEmissionFactors::new(35058.0, 0.634, 0.064),
            DistrictHeatingProvider::Pyeongtaek => HeatEmissionFactors::new(15717.0, 0.3793, 0.0301),
            DistrictHeatingProvider::Cheongju => HeatEmissionFactors::new(56642.0, 1.4574, 0.2295),
            DistrictHeatingProvider::Sejong => HeatEmissionFactors::new(42672.0, 0.7667, 0.0767),
            DistrictHeatingProvider::Daegu => HeatEmissionFactors::new(48249.0, 2.5138, 0.3705),
            DistrictHeatingProvider::Yangsan => HeatEmissionFactors::new(35444.0, 0.6346, 0.0635),
            DistrictHeatingProvider::Gimhae => HeatEmissionFactors::new(35747.0, 0.6372, 0.0637),
            DistrictHeatingProvider::Gwangju => HeatEmissionFactors::new(34068.0, 16.9847, 2.2506),
            DistrictHeatingProvider::National => HeatEmissionFactors::new(59510.0, 1.832, 0.44),
            DistrictHeatingProvider::Others => return None,
        };
        Some(f)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DistrictHeatingProvider::Sudogwon => "KDHC Capital Region",
            DistrictHeatingProvider::Pyeongtaek => "KDHC Pyeongtaek",
            DistrictHeatingProvider::Cheongju => "KDHC Cheongju",
            DistrictHeatingProvider::Sejong => "KDHC Sejong",
            DistrictHeatingProvider::Daegu => "KDHC Daegu",
            DistrictHeatingProvider::Yangsan => "KDHC Yangsan",
            DistrictHeatingProvider::Gimhae => "KDHC Gimhae",
            DistrictHeatingProvider::Gwangju => "KDHC Gwangju-Jeonnam",
            DistrictHeatingProvider::National => "National average",
            DistrictHeatingProvider::Others => "Other supplier (custom factors)",
        }
    }
}
