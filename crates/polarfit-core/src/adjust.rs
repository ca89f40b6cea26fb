//! Polar adjustment for wing loading and bug contamination.
//!
//! With load factor `f = √(m / m_ref)` every point of the reference polar
//! moves to `(f·v, f·w)`, and bugs scale sink by `1 / bugs`. Substituting
//! into the quadratic gives `(a / (f·bugs), b / bugs, c·f / bugs)`.

use crate::coefficients::PolarCoefficients;
use crate::solver::PolarError;

impl PolarCoefficients {
    /// Polar for an aircraft `loading_ratio` times heavier than the
    /// reference mass, flying with `bugs` of its clean-wing efficiency.
    ///
    /// `loading_ratio` must be finite and positive; `bugs` must be in `(0, 1]`.
    pub fn adjusted(&self, loading_ratio: f64, bugs: f64) -> Result<Self, PolarError> {
        if !self.is_valid() {
            return Err(PolarError::InvalidPolar);
        }
        if !loading_ratio.is_finite() || loading_ratio <= 0.0 {
            return Err(PolarError::InvalidAdjustment(format!(
                "loading ratio must be positive, got {loading_ratio}"
            )));
        }
        if !bugs.is_finite() || bugs <= 0.0 || bugs > 1.0 {
            return Err(PolarError::InvalidAdjustment(format!(
                "bugs factor must be in (0, 1], got {bugs}"
            )));
        }

        let f = loading_ratio.sqrt();
        let inv_bugs = 1.0 / bugs;
        Ok(Self::new(
            inv_bugs * self.a / f,
            inv_bugs * self.b,
            inv_bugs * self.c * f,
        ))
    }
}
