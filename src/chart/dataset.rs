use serde::Serialize;

use crate::{
    catalog::model::ClimateIndicator,
    chart::series::{ChartSeries, YearWindow, chart_axis_labels},
};

const MEAN_FALLBACK: &str = "#ffffff";
const MIN_FALLBACK: &str = "#3b82f6";
const MAX_FALLBACK: &str = "#ef4444";

/// One line of the zone chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    /// `Mean`, `Min` or `Max`.
    pub label: String,
    /// One value per series label.
    pub data: Vec<Option<f64>>,
    /// Line color.
    pub border_color: String,
}

/// Datasets for a series colored from an indicator palette.
///
/// Mean takes the third stop, Min the first and Max the last. Min and Max are only emitted when
/// the series has at least one value for them.
pub fn chart_datasets<S: AsRef<str>>(series: &ChartSeries, colors: &[S]) -> Vec<ChartDataset> {
    let stop = |i: Option<usize>, fallback: &str| {
        i.and_then(|i| colors.get(i))
            .map_or(fallback, AsRef::as_ref)
            .to_string()
    };

    let mut out = vec![ChartDataset {
        label: "Mean".to_string(),
        data: series.mean.clone(),
        border_color: stop(Some(2), MEAN_FALLBACK),
    }];
    if series.has_min() {
        out.push(ChartDataset {
            label: "Min".to_string(),
            data: series.min.clone(),
            border_color: stop(Some(0), MIN_FALLBACK),
        });
    }
    if series.has_max() {
        out.push(ChartDataset {
            label: "Max".to_string(),
            data: series.max.clone(),
            border_color: stop(colors.len().checked_sub(1), MAX_FALLBACK),
        });
    }
    out
}

/// Everything a chart widget needs for one zone: points, lines, y-range and default x ticks.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneChart {
    /// Year labels of the kept points.
    pub labels: Vec<String>,
    /// Mean/Min/Max lines.
    pub datasets: Vec<ChartDataset>,
    /// Padded y-axis bounds.
    pub y_range: [f64; 2],
    /// Sparse x-axis ticks over the indicator's full year span.
    pub axis_labels: Vec<String>,
    /// Indicator units with entities decoded.
    pub units: String,
}

impl ZoneChart {
    /// Build from a zone's `years` value; `None` when it has no supported shape.
    pub fn build(
        years: &serde_json::Value,
        indicator: &ClimateIndicator,
        window: YearWindow,
    ) -> Option<Self> {
        let series = ChartSeries::from_years(years, window)?.compact();
        let (lo, hi) = series.value_range();
        let axis_labels = indicator
            .years_range
            .map(|[start, end]| chart_axis_labels(start, end))
            .unwrap_or_default();

        Some(Self {
            datasets: chart_datasets(&series, &indicator.colors),
            labels: series.labels,
            y_range: [lo, hi],
            axis_labels,
            units: indicator.decoded_units(),
        })
    }
}
