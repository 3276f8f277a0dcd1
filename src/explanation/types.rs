use serde::Serialize;

use crate::aggregator::EmissionTotals;
use crate::sections::EmissionScope;

/// Complete breakdown for one site calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationExplanation {
    /// Human-readable industry, `None` when unset
    pub industry: Option<String>,
    pub sections: Vec<SectionBreakdown>,
    pub totals: EmissionTotals,
    /// Direct vs indirect explanation
    pub scope_notes: Vec<NoteCard>,
    /// Location-based vs market-based explanation
    pub method_notes: Vec<NoteCard>,
}

/// Which section a breakdown belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Electricity,
    DistrictHeating,
    CityGas,
    Propane,
    LiquidFuel,
    Vehicle,
    ElectricVehicle,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Electricity => "Electricity",
            SectionKind::DistrictHeating => "District Heating",
            SectionKind::CityGas => "City Gas (LNG)",
            SectionKind::Propane => "Propane",
            SectionKind::LiquidFuel => "Liquid Fuels",
            SectionKind::Vehicle => "Vehicles",
            SectionKind::ElectricVehicle => "Electric Vehicles",
        }
    }
}

/// Electricity accounting convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountingMethod {
    LocationBased,
    MarketBased,
}

impl AccountingMethod {
    pub fn label(&self) -> &'static str {
        match self {
            AccountingMethod::LocationBased => "Location-based",
            AccountingMethod::MarketBased => "Market-based",
        }
    }
}

/// Arithmetic of one section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBreakdown {
    pub section: SectionKind,
    pub title: String,
    pub scope: EmissionScope,
    /// Set for electricity only, which appears once per method
    pub method: Option<AccountingMethod>,
    pub sources: Vec<SourceBreakdown>,
    /// Rounded section tCO2e (2 dp)
    pub total: f64,
}

/// One fuel or activity inside a section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceBreakdown {
    pub label: String,
    pub input: Quantity,
    /// Value after unit conversion; `None` when used as entered
    pub converted: Option<Quantity>,
    pub lines: Vec<BreakdownLine>,
    /// Unrounded tCO2e
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gas {
    #[serde(rename = "CO2")]
    Co2,
    #[serde(rename = "CH4")]
    Ch4,
    #[serde(rename = "N2O")]
    N2o,
    /// Single-factor line with no gas split
    #[serde(rename = "CO2e")]
    Co2e,
}

impl Gas {
    pub fn symbol(&self) -> &'static str {
        match self {
            Gas::Co2 => "CO2",
            Gas::Ch4 => "CH4",
            Gas::N2o => "N2O",
            Gas::Co2e => "CO2e",
        }
    }
}

/// One gas term: the formula with its coefficients and the partial tCO2e
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownLine {
    pub gas: Gas,
    pub formula: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteCard {
    pub title: String,
    pub message: String,
}
