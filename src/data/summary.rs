use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::{catalog::model::ClimateIndicator, grid::pixel::format_coordinates};

/// One model's contribution to a grid cell, already in display units.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelValue {
    /// Zone name(s) reported by the model, or the model name.
    pub name: Value,
    /// Zone id, when the model reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Mean value.
    pub mean: Option<f64>,
    /// Minimum across ensemble members.
    pub min: Option<f64>,
    /// Maximum across ensemble members.
    pub max: Option<f64>,
}

impl ModelValue {
    /// Parse a `{values: [mean, min, max], names?}` or `{value, name?, id?}` entry.
    fn parse(model: &str, entry: &Value, factor: f64) -> Option<Self> {
        let scaled = |v: Option<&Value>| v.and_then(Value::as_f64).map(|x| x * factor);

        let parsed = if let Some(values) = entry.get("values").and_then(Value::as_array) {
            Self {
                name: entry
                    .get("names")
                    .filter(|n| !n.is_null())
                    .cloned()
                    .unwrap_or_else(|| Value::String(model.to_string())),
                id: None,
                mean: scaled(values.first()),
                min: scaled(values.get(1)),
                max: scaled(values.get(2)),
            }
        } else {
            let value = entry.get("value").filter(|v| !v.is_null())?;
            Self {
                name: entry
                    .get("name")
                    .filter(|n| !n.is_null())
                    .cloned()
                    .unwrap_or_else(|| Value::String(model.to_string())),
                id: entry.get("id").filter(|v| !v.is_null()).cloned(),
                mean: scaled(Some(value)),
                min: None,
                max: None,
            }
        };
        Some(parsed)
    }
}

/// Aggregate view of a clicked grid cell across every zone model that covers it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellSummary {
    /// Formatted coordinate, e.g. `12.25°N, 3.75°W`.
    pub name: String,
    /// Same as `name`; kept separate for clients that show both.
    pub coordinates: String,
    /// Mean of the per-model means.
    pub mean: Option<f64>,
    /// Lowest per-model minimum.
    pub min: Option<f64>,
    /// Highest per-model maximum.
    pub max: Option<f64>,
    /// Per-model values keyed by lowercased model name.
    pub models: BTreeMap<String, ModelValue>,
}

impl CellSummary {
    /// Summarise a pixel response (an object keyed by model name).
    ///
    /// Models without a usable value are skipped. When no model has a mean, the cell values are
    /// all `None`.
    pub fn from_pixel(response: &Value, indicator: &ClimateIndicator, lat: f64, lng: f64) -> Self {
        let factor = indicator.display_factor();
        let models: BTreeMap<String, ModelValue> = response
            .as_object()
            .into_iter()
            .flatten()
            .filter_map(|(model, entry)| {
                Some((model.to_lowercase(), ModelValue::parse(model, entry, factor)?))
            })
            .collect();

        let means: Vec<f64> = models.values().filter_map(|m| m.mean).collect();
        let (mean, min, max) = if means.is_empty() {
            (None, None, None)
        } else {
            let mean = means.iter().sum::<f64>() / means.len() as f64;
            let min = models.values().filter_map(|m| m.min).reduce(f64::min);
            let max = models.values().filter_map(|m| m.max).reduce(f64::max);
            (Some(mean), min, max)
        };

        let name = format_coordinates(lat, lng);
        Self {
            coordinates: name.clone(),
            name,
            mean,
            min,
            max,
            models,
        }
    }
}
