use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::error::FathomError;

/// Whether an indicator describes a physical stressor or a derived fisheries risk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    /// Physical/biogeochemical driver (warming, oxygen, pH, production).
    Stressor,
    /// Impact on species or catch.
    Risk,
}

/// A named climate variable presented on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateIndicator {
    /// Stable UI identifier (`sea-surface-temp`, ...).
    pub id: String,
    /// Short data name used in file paths and queries (`SST`, `MCP`, ...).
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// One-paragraph description shown in the info dialog.
    pub explanation: String,
    /// Placeholder shown before any zone/pixel is selected.
    pub data_placeholder: u32,
    /// Six hex color stops, low to high.
    pub colors: Vec<String>,
    /// Anchor of the methods page section describing this indicator.
    pub method_id: String,
    /// Inclusive year span covered by the time series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_range: Option<[i32; 2]>,
    /// Whether the indicator is selectable in the UI.
    pub display: bool,
    /// Units, possibly HTML-entity encoded.
    pub units: String,
    /// Alternative label for the about dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_label: Option<String>,
    /// Stressor or risk.
    #[serde(rename = "type")]
    pub kind: IndicatorKind,
}

impl ClimateIndicator {
    /// Multiplier applied to stored values before display.
    ///
    /// Maximum catch potential is stored in tens of thousands of tonnes and shown in thousands.
    pub fn display_factor(&self) -> f64 {
        if self.name == "MCP" { 10.0 } else { 1.0 }
    }

    /// Whether this is the revenue layer, which is colored from GeoJSON properties.
    pub fn is_revenue(&self) -> bool {
        self.id == "revenue"
    }

    /// Units with the HTML degree entity decoded.
    pub fn decoded_units(&self) -> String {
        decode_units(&self.units)
    }
}

/// An emissions pathway selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimateScenario {
    /// Stable UI identifier.
    pub id: String,
    /// Data name used in file paths (`26`, `85`).
    pub name: String,
    /// Human-readable label.
    pub label: String,
}

/// A future time window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodScenario {
    /// Stable UI identifier.
    pub id: String,
    /// Data name used in file paths (`present`, `mid`, `end`).
    pub name: String,
    /// Human-readable label.
    pub label: String,
}

impl PeriodScenario {
    /// Inclusive year window covered by this period.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        period_year_range(&self.name)
    }
}

/// Inclusive year window for a period data name.
pub fn period_year_range(name: &str) -> Option<(i32, i32)> {
    match name {
        "present" => Some((1986, 2005)),
        "mid" => Some((2040, 2060)),
        "end" => Some((2080, 2099)),
        _ => None,
    }
}

/// Decode the HTML entities used in indicator unit strings.
pub fn decode_units(units: &str) -> String {
    units.replace("&#176;", "°").replace("&deg;", "°")
}

/// Zone partition a zone file belongs to.
///
/// `Grid` is the per-country partition the revenue layer queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneModel {
    /// FAO major fishing areas.
    #[serde(rename = "FAO")]
    Fao,
    /// Large marine ecosystems.
    #[serde(rename = "LME")]
    Lme,
    /// Exclusive economic zones.
    #[serde(rename = "EEZ")]
    Eez,
    /// Biogeochemical provinces.
    #[serde(rename = "BGCP")]
    Bgcp,
    /// Country grid used by the revenue layer.
    Grid,
}

impl ZoneModel {
    /// Every model, in map-selector order.
    pub const ALL: [ZoneModel; 5] = [Self::Fao, Self::Lme, Self::Eez, Self::Bgcp, Self::Grid];

    /// Name as used in paths and queries.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fao => "FAO",
            Self::Lme => "LME",
            Self::Eez => "EEZ",
            Self::Bgcp => "BGCP",
            Self::Grid => "Grid",
        }
    }
}

impl fmt::Display for ZoneModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneModel {
    type Err = FathomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| FathomError::validation(format!("unknown zone model '{s}'")))
    }
}
