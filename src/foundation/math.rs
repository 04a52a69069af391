//! Scalar helpers shared by the color scale and chart code.

/// Linearly interpolate between `a` and `b` with clamped parameter `t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    a + ((b - a) * t)
}

/// Round `v` to `decimals` decimal places (half away from zero).
pub fn round_to(v: f64, decimals: i32) -> f64 {
    let k = 10f64.powi(decimals);
    (v * k).round() / k
}

/// Unclamped affine map from a `[d0, d1]` domain onto a `[r0, r1]` range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    /// Build a scale mapping `domain` onto `range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    /// Map `x` from the domain into the range. A zero-width domain maps to the range start.
    pub fn apply(self, x: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 {
            return self.r0;
        }
        let t = (x - self.d0) / span;
        self.r0 + (self.r1 - self.r0) * t
    }
}
