use serde::Serialize;
use serde_json::Value;

use crate::catalog::model::period_year_range;

/// First year of array-form yearly series (index 0).
pub const SERIES_BASE_YEAR: i32 = 1950;

/// Year window used to cut a zone's yearly series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearWindow {
    /// Keep every year.
    All,
    /// Keep `start..=end`.
    Range(i32, i32),
}

impl YearWindow {
    /// A custom range wins; otherwise the period's window; otherwise everything.
    pub fn select(custom: Option<(i32, i32)>, period: Option<&str>) -> Self {
        if let Some((start, end)) = custom {
            return Self::Range(start, end);
        }
        match period.and_then(period_year_range) {
            Some((start, end)) => Self::Range(start, end),
            None => Self::All,
        }
    }

    fn contains(self, year: i32) -> bool {
        match self {
            Self::All => true,
            Self::Range(start, end) => start <= year && year <= end,
        }
    }
}

/// Yearly mean/min/max series ready for a chart widget.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    /// X-axis labels, one per point.
    pub labels: Vec<String>,
    /// Mean per point.
    pub mean: Vec<Option<f64>>,
    /// Minimum per point; empty for single-value indicators.
    pub min: Vec<Option<f64>>,
    /// Maximum per point; empty for single-value indicators.
    pub max: Vec<Option<f64>>,
}

impl ChartSeries {
    /// Reshape a zone's `years` value, or `None` when it has neither supported form.
    ///
    /// Object form: `{"1950": [mean, min, max] | mean, ...}`, numeric keys only, sorted. Whether
    /// entries are triples is decided from the first kept year.
    ///
    /// Array form: `[[mean...], [min...], [max...]]` with index 0 at [`SERIES_BASE_YEAR`].
    pub fn from_years(years: &Value, window: YearWindow) -> Option<Self> {
        match years {
            Value::Object(map) => {
                let mut keys: Vec<(i32, &Value)> = map
                    .iter()
                    .filter_map(|(k, v)| Some((k.trim().parse::<i32>().ok()?, v)))
                    .filter(|(year, _)| window.contains(*year))
                    .collect();
                keys.sort_by_key(|(year, _)| *year);

                let triples = keys
                    .first()
                    .and_then(|(_, v)| v.as_array())
                    .is_some_and(|a| a.len() >= 3);

                let labels = keys.iter().map(|(y, _)| y.to_string()).collect();
                let series = if triples {
                    let at = |v: &Value, i: usize| v.as_array().and_then(|a| a.get(i)?.as_f64());
                    Self {
                        labels,
                        mean: keys.iter().map(|(_, v)| at(*v, 0)).collect(),
                        min: keys.iter().map(|(_, v)| at(*v, 1)).collect(),
                        max: keys.iter().map(|(_, v)| at(*v, 2)).collect(),
                    }
                } else {
                    Self {
                        labels,
                        mean: keys.iter().map(|(_, v)| v.as_f64()).collect(),
                        min: Vec::new(),
                        max: Vec::new(),
                    }
                };
                Some(series)
            }
            Value::Array(rows) if rows.len() >= 3 => {
                let row = |i: usize| -> Vec<Option<f64>> {
                    rows[i]
                        .as_array()
                        .map(|a| a.iter().map(Value::as_f64).collect())
                        .unwrap_or_default()
                };
                let (mean, min, max) = (row(0), row(1), row(2));

                let (start, end) = match window {
                    YearWindow::All => (0usize, mean.len()),
                    YearWindow::Range(y0, y1) => {
                        // i64 so years at the i32 limits clamp.
                        let len = mean.len() as i64;
                        let offset = |year: i64| (year - i64::from(SERIES_BASE_YEAR)).clamp(0, len);
                        let end = offset(i64::from(y1) + 1) as usize;
                        let start = offset(i64::from(y0)) as usize;
                        (start.min(end), end)
                    }
                };

                let cut = |v: &[Option<f64>]| -> Vec<Option<f64>> {
                    v.get(start..end.min(v.len()).max(start))
                        .map(<[_]>::to_vec)
                        .unwrap_or_default()
                };
                Some(Self {
                    labels: (start..end)
                        .map(|i| (SERIES_BASE_YEAR + i as i32).to_string())
                        .collect(),
                    mean: cut(mean.as_slice()),
                    min: cut(min.as_slice()),
                    max: cut(max.as_slice()),
                })
            }
            _ => None,
        }
    }

    /// Keep only points with a finite mean; min/max become `None` where missing.
    pub fn compact(&self) -> Self {
        let mut out = Self::default();
        for (i, mean) in self.mean.iter().enumerate() {
            let Some(mean) = mean.filter(|m| m.is_finite()) else {
                continue;
            };
            let pick = |v: &[Option<f64>]| v.get(i).copied().flatten().filter(|x| x.is_finite());
            out.labels
                .push(self.labels.get(i).cloned().unwrap_or_else(|| i.to_string()));
            out.mean.push(Some(mean));
            out.min.push(pick(self.min.as_slice()));
            out.max.push(pick(self.max.as_slice()));
        }
        out
    }

    /// Y-axis bounds over every value, padded by 10% of the span on both sides.
    ///
    /// `(0, 100)` when the series holds no finite value.
    pub fn value_range(&self) -> (f64, f64) {
        let values = self
            .mean
            .iter()
            .chain(&self.min)
            .chain(&self.max)
            .filter_map(|v| v.filter(|x| x.is_finite()));

        let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if lo > hi {
            return (0.0, 100.0);
        }
        let pad = (hi - lo) * 0.1;
        (lo - pad, hi + pad)
    }

    /// Whether any minimum value is present.
    pub fn has_min(&self) -> bool {
        self.min.iter().any(Option::is_some)
    }

    /// Whether any maximum value is present.
    pub fn has_max(&self) -> bool {
        self.max.iter().any(Option::is_some)
    }
}

/// Default x-axis labels for an indicator's full year span: about five evenly stepped years with
/// the end year always last.
pub fn chart_axis_labels(start: i32, end: i32) -> Vec<String> {
    if end < start {
        return Vec::new();
    }
    let step = ((end - start) as f64 / 5.0).ceil().max(1.0) as i32;
    let mut labels: Vec<String> = (start..=end)
        .step_by(step as usize)
        .map(|y| y.to_string())
        .collect();
    let last = end.to_string();
    if labels.last() != Some(&last) {
        labels.push(last);
    }
    labels
}

#[cfg(test)]
#[path = "../../tests/unit/chart/series.rs"]
mod tests;
