use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    catalog::model::ClimateIndicator,
    foundation::error::FathomResult,
    foundation::math::round_to,
    scale::color::NO_DATA,
    scale::ramp::ColorScale,
};

/// Precomputed `[median, min, max]` bounds for one layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct ColorbarBounds {
    /// Median value, labelled at the middle of the legend.
    pub median: f64,
    /// Lower bound of the ramp.
    pub min: f64,
    /// Upper bound of the ramp.
    pub max: f64,
}

impl From<[f64; 3]> for ColorbarBounds {
    fn from(v: [f64; 3]) -> Self {
        Self {
            median: v[0],
            min: v[1],
            max: v[2],
        }
    }
}

impl From<ColorbarBounds> for [f64; 3] {
    fn from(b: ColorbarBounds) -> Self {
        [b.median, b.min, b.max]
    }
}

/// Contents of `colorbars.json`: bounds for raster layers and for each zone model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorbarTable {
    /// Raster (grid image) bounds keyed by indicator name.
    #[serde(default)]
    pub image: BTreeMap<String, ColorbarBounds>,
    /// Zone bounds keyed by model, then indicator name.
    #[serde(default)]
    pub zone: BTreeMap<String, BTreeMap<String, ColorbarBounds>>,
}

impl ColorbarTable {
    /// Bounds for the raster layer of `indicator`.
    pub fn image_bounds(&self, indicator: &str) -> Option<ColorbarBounds> {
        self.image.get(indicator).copied()
    }

    /// Bounds for `indicator` aggregated over zones of `model`.
    pub fn zone_bounds(&self, model: &str, indicator: &str) -> Option<ColorbarBounds> {
        self.zone.get(model)?.get(indicator).copied()
    }
}

/// Value as printed on the legend.
///
/// The indicator's display factor is applied first; negative results keep two decimals and
/// non-negative results are floored to an integer.
pub fn colorbar_display(value: f64, display_factor: f64) -> f64 {
    let v = value * display_factor;
    if v < 0.0 { round_to(v, 2) } else { v.floor() }
}

/// Legend model: six swatches with labels under the first, fourth and last.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Colorbar {
    /// Swatch colors, low to high.
    pub colors: Vec<String>,
    /// Raw lower bound driving the ramp.
    pub min: f64,
    /// Raw upper bound driving the ramp.
    pub max: f64,
    /// Raw median.
    pub median: f64,
    /// Displayed lower bound.
    pub min_display: f64,
    /// Displayed upper bound.
    pub max_display: f64,
    /// Displayed median.
    pub median_display: f64,
    /// One label per swatch; empty where the legend shows nothing.
    pub labels: Vec<String>,
}

impl Colorbar {
    /// Legend for `indicator` with the given raw bounds.
    pub fn new(indicator: &ClimateIndicator, bounds: ColorbarBounds) -> Self {
        let factor = indicator.display_factor();
        let min_display = colorbar_display(bounds.min, factor);
        let max_display = colorbar_display(bounds.max, factor);
        let median_display = colorbar_display(bounds.median, factor);

        let labels = (0..indicator.colors.len())
            .map(|i| match i {
                0 => format!("< {min_display}"),
                3 => format!("{median_display}"),
                5 => format!("> {max_display}"),
                _ => String::new(),
            })
            .collect();

        Self {
            colors: indicator.colors.clone(),
            min: bounds.min,
            max: bounds.max,
            median: bounds.median,
            min_display,
            max_display,
            median_display,
            labels,
        }
    }

    /// Ramp matching this legend.
    pub fn scale(&self) -> FathomResult<ColorScale> {
        ColorScale::new(&self.colors, self.min, self.max)
    }
}

/// Revenue bounds from the country GeoJSON.
///
/// Values under properties `26` and `85` of every feature are collected in feature order. The
/// median is the element at `len / 2` of that collection, not of a sorted copy. All three values
/// are passed through [`colorbar_display`] because the revenue ramp runs on displayed values.
pub fn revenue_bounds(countries: &Value) -> Option<ColorbarBounds> {
    let features = countries.get("features")?.as_array()?;
    let revenues: Vec<f64> = features
        .iter()
        .flat_map(|f| {
            ["26", "85"]
                .into_iter()
                .filter_map(move |climate| f.get("properties")?.get(climate)?.as_f64())
        })
        .collect();

    let median = *revenues.get(revenues.len() / 2)?;
    let min = revenues.iter().copied().fold(f64::INFINITY, f64::min);
    let max = revenues.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(ColorbarBounds {
        median: colorbar_display(median, 1.0),
        min: colorbar_display(min, 1.0),
        max: colorbar_display(max, 1.0),
    })
}

/// Return a copy of a zone FeatureCollection with `properties.color` set on every feature.
///
/// Revenue features read `properties[<scenario>]`; every other indicator reads
/// `properties[<indicator>][<scenario>][<period>]`. Features without a value get [`NO_DATA`].
pub fn color_features(
    geojson: &Value,
    indicator: &ClimateIndicator,
    scenario: &str,
    period: &str,
    scale: &ColorScale,
) -> Value {
    let mut out = geojson.clone();
    let Some(features) = out.get_mut("features").and_then(Value::as_array_mut) else {
        return out;
    };

    for feature in features {
        let value = feature.get("properties").and_then(|props| {
            if indicator.is_revenue() {
                props.get(scenario)?.as_f64()
            } else {
                props.get(&indicator.name)?.get(scenario)?.get(period)?.as_f64()
            }
        });
        let color = value.map_or(NO_DATA, |v| scale.color_for(v)).to_hex();

        if let Some(props) = feature.get_mut("properties").and_then(Value::as_object_mut) {
            props.insert("color".to_string(), Value::String(color));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scale/colorbar.rs"]
mod tests;
