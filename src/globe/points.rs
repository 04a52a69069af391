use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::{grid::pixel::index_to_coordinates, scale::ramp::ColorScale};

/// A colored point for a 3-D globe.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GlobePoint {
    /// Latitude of the cell.
    pub lat: f64,
    /// Longitude of the cell.
    pub lng: f64,
    /// Cell value.
    pub value: f64,
    /// Hex color, when a scale was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A heat-map sample with intensity normalised to `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatmapPoint {
    /// Latitude of the cell.
    pub lat: f64,
    /// Longitude of the cell.
    pub lng: f64,
    /// Normalised intensity.
    pub intensity: f64,
}

/// Numeric value of one pixel entry.
///
/// Accepts a bare number, `{values: [mean, ..]}`, `{value}`, or a model-keyed object whose first
/// model has one of those shapes.
pub fn pixel_value(entry: &Value) -> Option<f64> {
    let direct = |e: &Value| -> Option<f64> {
        if let Some(v) = e.as_f64() {
            return Some(v);
        }
        if let Some(values) = e.get("values").and_then(Value::as_array) {
            return values.first()?.as_f64();
        }
        e.get("value")?.as_f64()
    };

    direct(entry)
        .or_else(|| {
            let (_, first) = entry.as_object()?.iter().next()?;
            first.is_object().then(|| direct(first)).flatten()
        })
        .filter(|v| v.is_finite())
}

fn cells(pixels: &[Value]) -> Vec<(f64, f64, f64)> {
    pixels
        .par_iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            if entry.is_null() {
                return None;
            }
            let value = pixel_value(entry)?;
            let at = index_to_coordinates(idx)?;
            Some((at.lat, at.lng, value))
        })
        .collect()
}

/// Convert a pixel array into globe points, in array order.
pub fn pixels_to_points(pixels: &[Value], scale: Option<&ColorScale>) -> Vec<GlobePoint> {
    cells(pixels)
        .into_par_iter()
        .map(|(lat, lng, value)| GlobePoint {
            lat,
            lng,
            value,
            color: scale.map(|s| s.hex_for(value)),
        })
        .collect()
}

/// Convert a pixel array into heat-map samples. Constant data gets intensity 0.5 everywhere.
pub fn pixels_to_heatmap(pixels: &[Value]) -> Vec<HeatmapPoint> {
    let cells = cells(pixels);
    let (lo, hi) = cells
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, _, v)| {
            (lo.min(v), hi.max(v))
        });
    let range = hi - lo;

    cells
        .into_iter()
        .map(|(lat, lng, v)| HeatmapPoint {
            lat,
            lng,
            intensity: if range > 0.0 { (v - lo) / range } else { 0.5 },
        })
        .collect()
}

/// Keep every `rate`-th point, starting with the first. A rate of 0 keeps everything.
pub fn sample_points<T: Clone>(points: &[T], rate: usize) -> Vec<T> {
    points.iter().step_by(rate.max(1)).cloned().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/globe/points.rs"]
mod tests;
