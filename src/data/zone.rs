use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::error::{FathomError, FathomResult};

/// Summary statistics for one zone under one period, plus its time series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneResponse {
    /// Period mean, as stored.
    pub mean: Value,
    /// Period minimum across models; `null` for single-value indicators.
    pub min: Value,
    /// Period maximum across models; `null` for single-value indicators.
    pub max: Value,
    /// Yearly series exactly as stored (object keyed by year, or `[mean[], min[], max[]]`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<Value>,
    /// Optional precomputed chart series for the zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<Value>,
}

/// Build a [`ZoneResponse`] from a parsed zone file.
///
/// Period entries are either `[mean, min, max, ...]` or a bare mean. Array elements are passed
/// through untouched, whatever their type.
pub fn zone_from_json(data: &Value, period: &str) -> FathomResult<ZoneResponse> {
    let Some(period_data) = data.as_object().and_then(|o| o.get(period)) else {
        return Err(FathomError::validation(format!(
            "Period '{period}' not found in data"
        )));
    };

    let (mean, min, max) = match period_data {
        Value::Array(items) if items.len() >= 3 => {
            (items[0].clone(), items[1].clone(), items[2].clone())
        }
        Value::Number(_) => (period_data.clone(), Value::Null, Value::Null),
        _ => {
            return Err(FathomError::shape(format!(
                "Unexpected data format for period '{period}'"
            )));
        }
    };

    Ok(ZoneResponse {
        mean,
        min,
        max,
        years: data.get("years").cloned(),
        chart: None,
    })
}

/// Pick a zone's entry out of a per-model chart file, if present.
pub fn chart_for_zone(chart_file: &Value, zone_id: &str) -> Option<Value> {
    chart_file.as_object()?.get(zone_id).cloned()
}

#[cfg(test)]
#[path = "../../tests/unit/data/zone.rs"]
mod tests;
