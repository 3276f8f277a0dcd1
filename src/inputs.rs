//! Activity Inputs
//!
//! The root aggregate the presentation layer owns: one value per session,
//! mutated through structured updates (see `session`) and reset to zero
//! defaults on request.
//!
//! JSON field names follow the form state of the web front end (camelCase,
//! `""` for an unset industry), so a serialized form can be loaded directly.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::Path;

use crate::factors::{DistrictHeatingProvider, HeatEmissionFactors, VehicleFuel};
use crate::utils::{ElectricityUnit, HeatUnit};

/// Industry of the reporting site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Energy,
    Manufacturing,
    Commercial,
    Residential,
}

impl Industry {
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Energy => "Energy industries",
            Industry::Manufacturing => "Manufacturing / construction",
            Industry::Commercial => "Commercial / public",
            Industry::Residential => "Residential / other",
        }
    }
}

/// Whether a section is entered as physical quantity or as spend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Volume,
    Cost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityInputs {
    #[serde(with = "optional_industry")]
    pub industry: Option<Industry>,
    pub electricity: ElectricityInputs,
    pub district_heating: DistrictHeatingInputs,
    pub city_gas: AmountInput,
    pub propane: AmountInput,
    pub liquid_fuel: LiquidFuelInputs,
    pub vehicle: VehicleInputs,
    pub electric_vehicle: ElectricVehicleInputs,
}

impl Default for ActivityInputs {
    fn default() -> Self {
        Self {
            industry: None,
            electricity: ElectricityInputs::default(),
            district_heating: DistrictHeatingInputs::default(),
            city_gas: AmountInput::default(),
            propane: AmountInput::default(),
            liquid_fuel: LiquidFuelInputs::default(),
            vehicle: VehicleInputs::default(),
            electric_vehicle: ElectricVehicleInputs::default(),
        }
    }
}

impl ActivityInputs {
    /// Load inputs from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read activity inputs: {:?}", path))?;

        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| "Failed to parse activity inputs JSON")
    }

    /// Return every field to its zero-value default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Grid electricity consumption
///
/// With `has_renewable` off, `total` is entered directly. With it on, the
/// form collects `renewable` and `conventional` and the total is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElectricityInputs {
    pub total: f64,
    pub renewable: f64,
    pub conventional: f64,
    pub has_renewable: bool,
    pub unit: ElectricityUnit,
}

impl Default for ElectricityInputs {
    fn default() -> Self {
        Self {
            total: 0.0,
            renewable: 0.0,
            conventional: 0.0,
            has_renewable: false,
            unit: ElectricityUnit::Mwh,
        }
    }
}

impl ElectricityInputs {
    /// Total consumption as the calculators see it
    pub fn effective_total(&self) -> f64 {
        if self.has_renewable {
            self.renewable + self.conventional
        } else {
            self.total
        }
    }

    /// Non-renewable share, never negative
    pub fn effective_conventional(&self) -> f64 {
        (self.effective_total() - self.renewable).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistrictHeatingInputs {
    pub provider: DistrictHeatingProvider,
    pub amount: f64,
    pub unit: HeatUnit,
    /// Read only when `provider` is `Others`. A missing key loads as `None`
    /// (flat fallback); a fresh form starts from zeros.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emission_factors: Option<HeatEmissionFactors>,
}

impl Default for DistrictHeatingInputs {
    fn default() -> Self {
        Self {
            provider: DistrictHeatingProvider::default(),
            amount: 0.0,
            unit: HeatUnit::Mcal,
            custom_emission_factors: Some(HeatEmissionFactors::default()),
        }
    }
}

/// Single quantity (city gas in Nm³, propane in kg, liquid fuels in L)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountInput {
    pub amount: f64,
}

impl AmountInput {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidFuelInputs {
    pub diesel: AmountInput,
    pub kerosene: AmountInput,
    pub gasoline: AmountInput,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleInputs {
    pub input_type: InputMode,
    pub fuels: VehicleFuels,
}

impl VehicleInputs {
    /// The value that matters under the current input mode
    pub fn active_value(&self, fuel: VehicleFuel) -> f64 {
        let entry = self.fuels.get(fuel);
        match self.input_type {
            InputMode::Volume => entry.amount,
            InputMode::Cost => entry.cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleFuels {
    pub gasoline: VehicleFuelInput,
    pub diesel: VehicleFuelInput,
    pub lpg: VehicleFuelInput,
}

impl VehicleFuels {
    pub fn get(&self, fuel: VehicleFuel) -> &VehicleFuelInput {
        match fuel {
            VehicleFuel::Gasoline => &self.gasoline,
            VehicleFuel::Diesel => &self.diesel,
            VehicleFuel::Lpg => &self.lpg,
        }
    }

    pub fn get_mut(&mut self, fuel: VehicleFuel) -> &mut VehicleFuelInput {
        match fuel {
            VehicleFuel::Gasoline => &mut self.gasoline,
            VehicleFuel::Diesel => &mut self.diesel,
            VehicleFuel::Lpg => &mut self.lpg,
        }
    }
}

/// Liters and spend for one vehicle fuel; only one is read, per input mode
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleFuelInput {
    pub amount: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElectricVehicleInputs {
    pub input_type: InputMode,
    pub amount: f64,
    pub cost: f64,
    pub unit: ElectricityUnit,
}

impl Default for ElectricVehicleInputs {
    fn default() -> Self {
        Self {
            input_type: InputMode::Volume,
            amount: 0.0,
            cost: 0.0,
            unit: ElectricityUnit::Kwh,
        }
    }
}

impl ElectricVehicleInputs {
    pub fn active_value(&self) -> f64 {
        match self.input_type {
            InputMode::Volume => self.amount,
            InputMode::Cost => self.cost,
        }
    }
}

/// `""` / null ⇄ `None`, otherwise the lowercase industry name
mod optional_industry {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<Industry>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match value {
            Some(industry) => industry.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Industry>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some("energy") => Ok(Some(Industry::Energy)),
            Some("manufacturing") => Ok(Some(Industry::Manufacturing)),
            Some("commercial") => Ok(Some(Industry::Commercial)),
            Some("residential") => Ok(Some(Industry::Residential)),
            Some(other) => Err(serde::de::Error::unknown_variant(
                other,
                &["energy", "manufacturing", "commercial", "residential"],
            )),
        }
    }
}
