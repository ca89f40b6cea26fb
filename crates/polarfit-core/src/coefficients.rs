//! The quadratic polar model `w(v) = a·v² + b·v + c` and its evaluation.
//!
//! Speeds and sink rates share one unit system; sink is negative when the
//! aircraft descends. A fitted glider polar therefore opens downward
//! (`a < 0`) and peaks at the minimum-sink speed.

use serde::{Deserialize, Serialize};

use crate::point::PolarPoint;

/// Coefficients of the quadratic polar model.
///
/// The all-zero triple is the sentinel for "no polar fitted". Use
/// [`PolarCoefficients::is_valid`] before evaluating: the sentinel evaluates
/// to a flat `w ≡ 0`, which is not a usable polar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl PolarCoefficients {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// The invalid sentinel.
    #[must_use]
    pub const fn invalid() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Reset to the invalid sentinel.
    pub fn set_invalid(&mut self) {
        *self = Self::invalid();
    }

    /// Whether this value is a usable polar.
    ///
    /// False for the zero triple (`-0.0` included) and for any non-finite
    /// coefficient.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_finite() && !self.is_zero()
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.a == 0.0 && self.b == 0.0 && self.c == 0.0
    }

    /// Whether the curve has the shape of a real glider polar: it opens
    /// downward and has a negative intercept.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        self.is_valid() && self.a < 0.0 && self.c < 0.0
    }

    /// Sink rate at speed `v`.
    #[must_use]
    pub fn sink_rate(&self, v: f64) -> f64 {
        (self.a * v + self.b) * v + self.c
    }

    /// Slope `dw/dv` at speed `v`.
    #[must_use]
    pub fn sink_rate_derivative(&self, v: f64) -> f64 {
        2.0 * self.a * v + self.b
    }

    /// Glide ratio `-v / w(v)` at speed `v`.
    ///
    /// `None` when the polar is invalid or the aircraft is not descending.
    #[must_use]
    pub fn glide_ratio(&self, v: f64) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }
        let w = self.sink_rate(v);
        if w >= 0.0 {
            return None;
        }
        Some(-v / w)
    }

    /// The vertex of the polar: speed and sink rate of minimum sink.
    #[must_use]
    pub fn min_sink(&self) -> Option<PolarPoint> {
        if !self.is_valid() || self.a >= 0.0 {
            return None;
        }
        let v = -self.b / (2.0 * self.a);
        Some(PolarPoint::new(v, self.sink_rate(v)))
    }

    /// The tangent point from the origin: speed and sink rate of best glide.
    ///
    /// The tangent touches where `a·v² = c`, so it exists only when `a` and
    /// `c` share a sign.
    #[must_use]
    pub fn best_glide(&self) -> Option<PolarPoint> {
        if !self.is_valid() || self.a >= 0.0 {
            return None;
        }
        let ratio = self.c / self.a;
        if ratio <= 0.0 {
            return None;
        }
        let v = ratio.sqrt();
        Some(PolarPoint::new(v, self.sink_rate(v)))
    }
}
