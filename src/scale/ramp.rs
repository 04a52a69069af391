use serde::Serialize;

use crate::{
    foundation::error::{FathomError, FathomResult},
    foundation::math::LinearScale,
    scale::color::{NO_DATA, Rgb},
};

/// Piecewise-linear color ramp over `[min, max]`.
///
/// Stops are evenly spaced: stop `i` (1-based) sits at `step(i)` where `step` maps `1..=n` onto
/// `min..=max`. Values outside the bounds take the end colors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorScale {
    stops: Vec<Rgb>,
    min: f64,
    max: f64,
}

impl ColorScale {
    /// Build a ramp from hex color stops.
    pub fn new<S: AsRef<str>>(colors: &[S], min: f64, max: f64) -> FathomResult<Self> {
        if colors.len() < 2 {
            return Err(FathomError::validation(
                "color scale needs at least two stops",
            ));
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(FathomError::validation("color scale bounds must be finite"));
        }
        let stops = colors
            .iter()
            .map(|c| Rgb::parse_hex(c.as_ref()))
            .collect::<FathomResult<Vec<_>>>()?;
        Ok(Self { stops, min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Domain position of every stop.
    pub fn stop_positions(&self) -> Vec<f64> {
        let n = self.stops.len() as f64;
        let step = LinearScale::new((1.0, n), (self.min, self.max));
        (1..=self.stops.len()).map(|i| step.apply(i as f64)).collect()
    }

    /// Color for `value`. NaN maps to [`NO_DATA`].
    pub fn color_for(&self, value: f64) -> Rgb {
        if value.is_nan() {
            return NO_DATA;
        }
        let span = self.max - self.min;
        if span == 0.0 {
            return self.stops[0];
        }

        let last = self.stops.len() - 1;
        let t = ((value - self.min) / span).clamp(0.0, 1.0) * last as f64;
        let seg = (t.floor() as usize).min(last - 1);
        self.stops[seg].lerp(self.stops[seg + 1], t - seg as f64)
    }

    /// Hex color for `value`.
    pub fn hex_for(&self, value: f64) -> String {
        self.color_for(value).to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/ramp.rs"]
mod tests;
