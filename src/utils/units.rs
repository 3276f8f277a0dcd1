//! Unit Conversion Utilities
//!
//! Converts user-entered quantities into the units the emission formulas
//! expect:
//! - Electricity: kWh → MWh
//! - Heat: Mcal / MWh / MJ → TJ
//! - Liquids: L → KL
//! - Money: cost → volume at a fixed unit price
//!
//! The table is fixed and domain specific; there is no general unit algebra.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CalculationError, Result};

/// TJ per MWh
pub const TJ_PER_MWH: f64 = 0.0036;
/// TJ per MJ
pub const TJ_PER_MJ: f64 = 0.000001;
/// TJ per Mcal
pub const TJ_PER_MCAL: f64 = 0.0000041868;

/// Unit for electricity consumption (grid and electric vehicle charging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectricityUnit {
    #[serde(rename = "kWh")]
    Kwh,
    #[serde(rename = "MWh")]
    Mwh,
}

impl ElectricityUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElectricityUnit::Kwh => "kWh",
            ElectricityUnit::Mwh => "MWh",
        }
    }
}

impl fmt::Display for ElectricityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElectricityUnit {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "kWh" => Ok(ElectricityUnit::Kwh),
            "MWh" => Ok(ElectricityUnit::Mwh),
            other => Err(CalculationError::InvalidUnit(other.to_string())),
        }
    }
}

/// Unit for purchased heat (district heating / steam)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatUnit {
    #[serde(rename = "Mcal")]
    Mcal,
    #[serde(rename = "MWh")]
    Mwh,
    #[serde(rename = "MJ")]
    Mj,
}

impl HeatUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeatUnit::Mcal => "Mcal",
            HeatUnit::Mwh => "MWh",
            HeatUnit::Mj => "MJ",
        }
    }

    /// TJ per one unit of this heat measure
    pub fn tj_factor(&self) -> f64 {
        match self {
            HeatUnit::Mwh => TJ_PER_MWH,
            HeatUnit::Mj => TJ_PER_MJ,
            HeatUnit::Mcal => TJ_PER_MCAL,
        }
    }
}

impl fmt::Display for HeatUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeatUnit {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Mcal" => Ok(HeatUnit::Mcal),
            "MWh" => Ok(HeatUnit::Mwh),
            "MJ" => Ok(HeatUnit::Mj),
            other => Err(CalculationError::InvalidUnit(other.to_string())),
        }
    }
}

/// Convert electricity to MWh (MWh passes through unchanged)
pub fn to_mwh(amount: f64, unit: ElectricityUnit) -> f64 {
    match unit {
        ElectricityUnit::Kwh => kwh_to_mwh(amount),
        ElectricityUnit::Mwh => amount,
    }
}

pub fn kwh_to_mwh(kwh: f64) -> f64 {
    kwh / 1000.0
}

/// Convert a heat quantity to TJ
pub fn heat_to_tj(amount: f64, unit: HeatUnit) -> f64 {
    amount * unit.tj_factor()
}

/// Convert a heat quantity given an untyped unit label
///
/// Fails with `InvalidUnit` for anything outside Mcal / MWh / MJ.
pub fn heat_to_tj_str(amount: f64, unit: &str) -> Result<f64> {
    let unit: HeatUnit = unit.parse()?;
    Ok(heat_to_tj(amount, unit))
}

pub fn liters_to_kiloliters(liters: f64) -> f64 {
    liters / 1000.0
}

/// Convert a spend into a physical quantity at a fixed unit price
///
/// A non-positive price is a static-data bug and is reported as
/// `InvalidPrice` rather than producing an infinite or negative volume.
pub fn cost_to_volume(cost: f64, price_per_unit: f64, fuel: &'static str) -> Result<f64> {
    if !(price_per_unit > 0.0) {
        return Err(CalculationError::InvalidPrice {
            fuel,
            price: price_per_unit,
        });
    }
    Ok(cost / price_per_unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kwh_to_mwh() {
        assert_relative_eq!(to_mwh(2500.0, ElectricityUnit::Kwh), 2.5);
        assert_relative_eq!(to_mwh(2.5, ElectricityUnit::Mwh), 2.5);
    }

    #[test]
    fn test_heat_to_tj() {
        assert_relative_eq!(heat_to_tj(1000.0, HeatUnit::Mcal), 0.0041868, epsilon = 1e-15);
        assert_relative_eq!(heat_to_tj(10.0, HeatUnit::Mwh), 0.036, epsilon = 1e-15);
        assert_relative_eq!(heat_to_tj(1_000_000.0, HeatUnit::Mj), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_heat_to_tj_rejects_unknown_unit() {
        let err = heat_to_tj_str(1.0, "GJ").unwrap_err();
        assert_eq!(err, CalculationError::InvalidUnit("GJ".to_string()));
        assert_relative_eq!(heat_to_tj_str(1.0, "MWh").unwrap(), 0.0036);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("kWh".parse::<ElectricityUnit>().unwrap(), ElectricityUnit::Kwh);
        assert_eq!("MJ".parse::<HeatUnit>().unwrap(), HeatUnit::Mj);
        assert!("kwh".parse::<ElectricityUnit>().is_err());
    }

    #[test]
    fn test_cost_to_volume() {
        assert_relative_eq!(cost_to_volume(16467.1, 1646.71, "gasoline").unwrap(), 10.0, epsilon = 1e-9);
        assert!(matches!(
            cost_to_volume(100.0, 0.0, "diesel"),
            Err(CalculationError::InvalidPrice { fuel: "diesel", .. })
        ));
        assert!(cost_to_volume(100.0, -5.0, "lpg").is_err());
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&ElectricityUnit::Kwh).unwrap(), "\"kWh\"");
        let unit: HeatUnit = serde_json::from_str("\"Mcal\"").unwrap();
        assert_eq!(unit, HeatUnit::Mcal);
    }
}
