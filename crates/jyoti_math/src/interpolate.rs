//! Three-point interpolation over samples at n = -1, 0, +1.
//!
//! Source: Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 3, eq. 3.3.

/// Interpolate `y(n)` from samples `y1 = y(-1)`, `y2 = y(0)`, `y3 = y(+1)`.
///
/// `n` is the interpolating factor in units of the sample spacing.
pub fn interpolate3(y1: f64, y2: f64, y3: f64, n: f64) -> f64 {
    let a = y2 - y1;
    let b = y3 - y2;
    let c = b - a;
    y2 + 0.5 * n * (a + b + n * c)
}

/// Quadratic through three equally spaced samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic3 {
    pub y1: f64,
    pub y2: f64,
    pub y3: f64,
}

impl Quadratic3 {
    pub fn new(y1: f64, y2: f64, y3: f64) -> Self {
        Self { y1, y2, y3 }
    }

    /// Value at interpolating factor `n` (0 = middle sample).
    pub fn at(&self, n: f64) -> f64 {
        interpolate3(self.y1, self.y2, self.y3, n)
    }
}
