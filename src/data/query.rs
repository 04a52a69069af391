//! Request parameter sets for the data endpoints.
//!
//! Every field arrives as an optional string; `validate` turns a query into its checked form or
//! reports the full list of required parameters, as the UI expects.

use serde::{Deserialize, Serialize};

use crate::foundation::error::{FathomError, FathomResult};

/// Raw `/api/zone` query.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ZoneQuery {
    /// Zone model (`FAO`, `LME`, `EEZ`, `BGCP`, `Grid`).
    pub model: Option<String>,
    /// Indicator data name.
    pub indicator: Option<String>,
    /// Scenario data name.
    pub climate: Option<String>,
    /// Zone identifier within the model.
    pub id: Option<String>,
    /// Period data name.
    pub period: Option<String>,
}

/// Checked `/api/zone` parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ZoneParams {
    /// Zone model.
    pub model: String,
    /// Indicator data name as requested (before the storage alias).
    pub indicator: String,
    /// Scenario data name.
    pub climate: String,
    /// Zone identifier.
    pub id: String,
    /// Period data name.
    pub period: String,
}

impl ZoneQuery {
    /// Check that every parameter is present and is a plain path segment.
    pub fn validate(&self) -> FathomResult<ZoneParams> {
        const MSG: &str = "Missing required parameters: model, indicator, climate, id, period";
        let (Some(model), Some(indicator), Some(climate), Some(id), Some(period)) = (
            non_empty(&self.model),
            non_empty(&self.indicator),
            non_empty(&self.climate),
            non_empty(&self.id),
            non_empty(&self.period),
        ) else {
            return Err(FathomError::validation(MSG));
        };
        Ok(ZoneParams {
            model: path_segment("model", model)?,
            indicator: path_segment("indicator", indicator)?,
            climate: path_segment("climate", climate)?,
            id: path_segment("id", id)?,
            period: period.to_string(),
        })
    }
}

/// Raw `/api/pixel` query.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PixelQuery {
    /// Indicator data name.
    pub indicator: Option<String>,
    /// Scenario data name.
    pub climate: Option<String>,
    /// Period data name.
    pub period: Option<String>,
    /// Clicked latitude, as text.
    pub latitude: Option<String>,
    /// Clicked longitude, as text.
    pub longitude: Option<String>,
}

/// Checked `/api/pixel` parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelParams {
    /// Layer the pixel is read from.
    pub layer: LayerParams,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl PixelQuery {
    /// Check presence of every parameter and parse the coordinates.
    pub fn validate(&self) -> FathomResult<PixelParams> {
        const MSG: &str =
            "Missing required parameters: indicator, climate, period, latitude, longitude";
        let (Some(indicator), Some(climate), Some(period), Some(latitude), Some(longitude)) = (
            non_empty(&self.indicator),
            non_empty(&self.climate),
            non_empty(&self.period),
            non_empty(&self.latitude),
            non_empty(&self.longitude),
        ) else {
            return Err(FathomError::validation(MSG));
        };
        Ok(PixelParams {
            layer: LayerParams::checked(indicator, climate, period)?,
            latitude: parse_degrees("latitude", latitude)?,
            longitude: parse_degrees("longitude", longitude)?,
        })
    }
}

/// Raw `/api/pixel-data` and `/api/globe` query.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LayerQuery {
    /// Indicator data name.
    pub indicator: Option<String>,
    /// Scenario data name.
    pub climate: Option<String>,
    /// Period data name.
    pub period: Option<String>,
}

/// A whole-map layer: one indicator under one scenario and period.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LayerParams {
    /// Indicator data name as requested.
    pub indicator: String,
    /// Scenario data name.
    pub climate: String,
    /// Period data name.
    pub period: String,
}

impl LayerParams {
    fn checked(indicator: &str, climate: &str, period: &str) -> FathomResult<Self> {
        Ok(Self {
            indicator: path_segment("indicator", indicator)?,
            climate: path_segment("climate", climate)?,
            period: path_segment("period", period)?,
        })
    }
}

impl LayerQuery {
    /// Check that every parameter is present and is a plain path segment.
    pub fn validate(&self) -> FathomResult<LayerParams> {
        const MSG: &str = "Missing required parameters: indicator, climate, period";
        let (Some(indicator), Some(climate), Some(period)) = (
            non_empty(&self.indicator),
            non_empty(&self.climate),
            non_empty(&self.period),
        ) else {
            return Err(FathomError::validation(MSG));
        };
        LayerParams::checked(indicator, climate, period)
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

/// Accept `s` only if it can be joined onto a directory without leaving it.
pub fn path_segment(field: &str, s: &str) -> FathomResult<String> {
    if s.is_empty() || s == "." || s == ".." || s.contains(['/', '\\', '\0']) {
        return Err(FathomError::validation(format!(
            "Invalid value for parameter '{field}'"
        )));
    }
    Ok(s.to_string())
}

fn parse_degrees(field: &str, s: &str) -> FathomResult<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FathomError::validation(format!("Invalid value for parameter '{field}'")))
}

#[cfg(test)]
#[path = "../../tests/unit/data/query.rs"]
mod tests;
