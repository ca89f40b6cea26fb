//! Closed-form polar fitting.
//!
//! Both fits solve a 3×3 linear system for `(a, b, c)`. The `try_*`
//! functions report why a fit failed; the plain variants fold every failure
//! into the invalid sentinel, so callers only need
//! [`PolarCoefficients::is_valid`].

use crate::coefficients::PolarCoefficients;
use crate::constants::abscissas_coincide;
use crate::point::FitMethod;

/// Error type for polar fitting and adjustment.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolarError {
    /// Two sample speeds coincide, so the system is singular.
    #[error("sample speeds {first} and {second} coincide")]
    SingularInput { first: f64, second: f64 },

    /// A sample value was NaN or infinite.
    #[error("sample points must be finite")]
    NonFiniteInput,

    /// The solve overflowed.
    #[error("fit produced non-finite coefficients")]
    NonFiniteResult,

    /// The fit produced the all-zero triple, which is reserved for "no polar".
    #[error("fit produced the zero polar")]
    ZeroPolar,

    /// Wrong number of sample points for a fitting method.
    #[error("{method} fit needs {expected} points, got {got}", expected = .method.point_count())]
    PointCount { method: FitMethod, got: usize },

    /// No fitting method takes this many sample points.
    #[error("expected 2 or 3 sample points, got {0}")]
    UnsupportedPointCount(usize),

    /// A sample point could not be parsed.
    #[error("invalid point: {0}")]
    InvalidPoint(String),

    /// A loading ratio or bugs factor is out of range.
    #[error("invalid adjustment: {0}")]
    InvalidAdjustment(String),

    /// The operation needs a valid polar.
    #[error("polar is not valid")]
    InvalidPolar,
}

impl PolarError {
    /// Whether this error means the sample points do not determine a polar.
    #[must_use]
    pub fn is_fit_failure(&self) -> bool {
        matches!(
            self,
            Self::SingularInput { .. }
                | Self::NonFiniteInput
                | Self::NonFiniteResult
                | Self::ZeroPolar
        )
    }
}

impl FitMethod {
    /// Number of sample points this method consumes.
    #[must_use]
    pub const fn point_count(self) -> usize {
        match self {
            Self::ThreePoint => 3,
            Self::StationaryPoint => 2,
        }
    }
}

impl PolarCoefficients {
    /// Coefficients of the quadratic through three `(v, w)` pairs.
    ///
    /// Returns [`PolarCoefficients::invalid`] if two speeds coincide or an
    /// input is not finite.
    #[must_use]
    pub fn from_three_points(v1: f64, v2: f64, v3: f64, w1: f64, w2: f64, w3: f64) -> Self {
        Self::try_from_three_points(v1, v2, v3, w1, w2, w3).unwrap_or_default()
    }

    /// Coefficients of the quadratic through `(v1, w1)` and `(v2, w2)` whose
    /// derivative vanishes at `v1`.
    ///
    /// Returns [`PolarCoefficients::invalid`] if the speeds coincide or an
    /// input is not finite.
    #[must_use]
    pub fn from_two_points_with_stationary_point(v1: f64, v2: f64, w1: f64, w2: f64) -> Self {
        Self::try_from_two_points_with_stationary_point(v1, v2, w1, w2).unwrap_or_default()
    }

    /// Fallible variant of [`PolarCoefficients::from_three_points`].
    pub fn try_from_three_points(
        v1: f64,
        v2: f64,
        v3: f64,
        w1: f64,
        w2: f64,
        w3: f64,
    ) -> Result<Self, PolarError> {
        let mut points = [(v1, w1), (v2, w2), (v3, w3)];
        if points.iter().any(|&(v, w)| !v.is_finite() || !w.is_finite()) {
            return Err(PolarError::NonFiniteInput);
        }

        // Solving on sorted points makes the result independent of argument order.
        points.sort_by(|x, y| x.0.total_cmp(&y.0));
        let [(v1, w1), (v2, w2), (v3, w3)] = points;

        for (first, second) in [(v1, v2), (v2, v3)] {
            if abscissas_coincide(first, second) {
                return Err(PolarError::SingularInput { first, second });
            }
        }

        // Newton divided differences.
        let d12 = (w2 - w1) / (v2 - v1);
        let d23 = (w3 - w2) / (v3 - v2);
        let a = (d23 - d12) / (v3 - v1);
        let b = d12 - a * (v1 + v2);
        let c = w1 - (a * v1 + b) * v1;

        checked(Self::new(a, b, c))
    }

    /// Fallible variant of
    /// [`PolarCoefficients::from_two_points_with_stationary_point`].
    pub fn try_from_two_points_with_stationary_point(
        v1: f64,
        v2: f64,
        w1: f64,
        w2: f64,
    ) -> Result<Self, PolarError> {
        if [v1, v2, w1, w2].iter().any(|x| !x.is_finite()) {
            return Err(PolarError::NonFiniteInput);
        }
        if abscissas_coincide(v1, v2) {
            return Err(PolarError::SingularInput {
                first: v1,
                second: v2,
            });
        }

        let dv = v2 - v1;
        let a = (w2 - w1) / (dv * dv);
        let b = -2.0 * a * v1;
        let c = w1 + a * v1 * v1;

        checked(Self::new(a, b, c))
    }
}

fn checked(pc: PolarCoefficients) -> Result<PolarCoefficients, PolarError> {
    if !pc.is_finite() {
        return Err(PolarError::NonFiniteResult);
    }
    if pc.is_zero() {
        return Err(PolarError::ZeroPolar);
    }
    Ok(pc)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64) {
        let scale = 1.0_f64.max(expected.abs());
        assert!(
            (actual - expected).abs() <= TOL * scale,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn three_points_reference_scenario() {
        let pc = PolarCoefficients::from_three_points(20.0, 30.0, 40.0, -1.0, -1.5, -2.5);
        assert_close(pc.a, -0.0025);
        assert_close(pc.b, 0.075);
        assert_close(pc.c, -1.5);
        assert!(pc.is_valid());
    }

    #[test]
    fn three_points_pass_through_samples() {
        let (v, w) = ([22.0, 33.0, 44.0], [-0.62, -0.80, -1.40]);
        let pc = PolarCoefficients::from_three_points(v[0], v[1], v[2], w[0], w[1], w[2]);
        for i in 0..3 {
            assert_close(pc.sink_rate(v[i]), w[i]);
        }
    }

    #[test]
    fn three_points_any_order_is_bit_identical() {
        let expected = PolarCoefficients::from_three_points(20.0, 30.0, 40.0, -1.0, -1.5, -2.5);
        let orders = [
            (30.0, 20.0, 40.0, -1.5, -1.0, -2.5),
            (40.0, 30.0, 20.0, -2.5, -1.5, -1.0),
            (20.0, 40.0, 30.0, -1.0, -2.5, -1.5),
            (40.0, 20.0, 30.0, -2.5, -1.0, -1.5),
            (30.0, 40.0, 20.0, -1.5, -2.5, -1.0),
        ];
        for (v1, v2, v3, w1, w2, w3) in orders {
            let pc = PolarCoefficients::from_three_points(v1, v2, v3, w1, w2, w3);
            assert_eq!(pc.a.to_bits(), expected.a.to_bits());
            assert_eq!(pc.b.to_bits(), expected.b.to_bits());
            assert_eq!(pc.c.to_bits(), expected.c.to_bits());
        }
    }

    #[test]
    fn three_points_coincident_speeds_are_invalid() {
        for (v1, v2, v3) in [(20.0, 20.0, 40.0), (20.0, 30.0, 20.0), (20.0, 40.0, 40.0)] {
            let pc = PolarCoefficients::from_three_points(v1, v2, v3, -1.0, -1.5, -2.5);
            assert_eq!(pc, PolarCoefficients::invalid());
            assert!(pc.a.is_finite() && pc.b.is_finite() && pc.c.is_finite());
        }
    }

    #[test]
    fn three_points_singular_error_names_speeds() {
        let err =
            PolarCoefficients::try_from_three_points(30.0, 20.0, 30.0, -1.0, -1.5, -2.5)
                .unwrap_err();
        assert_eq!(
            err,
            PolarError::SingularInput {
                first: 30.0,
                second: 30.0
            }
        );
        assert!(err.is_fit_failure());
    }

    #[test]
    fn three_points_nearly_coincident_speeds_are_singular() {
        let err = PolarCoefficients::try_from_three_points(
            30.0,
            30.0 + 1e-12,
            40.0,
            -1.0,
            -1.5,
            -2.5,
        )
        .unwrap_err();
        assert!(matches!(err, PolarError::SingularInput { .. }));
    }

    #[test]
    fn three_points_non_finite_input() {
        let err = PolarCoefficients::try_from_three_points(20.0, f64::NAN, 40.0, -1.0, -1.5, -2.5)
            .unwrap_err();
        assert_eq!(err, PolarError::NonFiniteInput);
        let pc =
            PolarCoefficients::from_three_points(20.0, 30.0, 40.0, -1.0, f64::INFINITY, -2.5);
        assert!(!pc.is_valid());
    }

    #[test]
    fn three_points_overflow_is_reported() {
        let err = PolarCoefficients::try_from_three_points(
            0.0, 1.0e-5, 2.0e-5, 1.0e300, -1.0e300, 1.0e300,
        )
        .unwrap_err();
        assert_eq!(err, PolarError::NonFiniteResult);
    }

    #[test]
    fn three_points_all_zero_sink_folds_into_sentinel() {
        let err = PolarCoefficients::try_from_three_points(20.0, 30.0, 40.0, 0.0, 0.0, 0.0)
            .unwrap_err();
        assert_eq!(err, PolarError::ZeroPolar);
        assert!(!PolarCoefficients::from_three_points(20.0, 30.0, 40.0, 0.0, 0.0, 0.0).is_valid());
    }

    #[test]
    fn three_collinear_points_give_zero_a() {
        let pc = PolarCoefficients::from_three_points(10.0, 20.0, 30.0, -1.0, -2.0, -3.0);
        assert!(pc.is_valid());
        assert_close(pc.a, 0.0);
        assert_close(pc.b, -0.1);
        assert_close(pc.c, 0.0);
    }

    #[test]
    fn two_points_reference_scenario() {
        let pc = PolarCoefficients::from_two_points_with_stationary_point(25.0, 40.0, -0.8, -2.0);
        assert!(pc.is_valid());
        assert_close(pc.sink_rate(25.0), -0.8);
        assert_close(pc.sink_rate(40.0), -2.0);
        assert_close(pc.sink_rate_derivative(25.0), 0.0);
        assert_close(pc.a, -1.2 / 225.0);
        assert_close(pc.b, 2.4 * 25.0 / 225.0);
        assert_close(pc.c, -0.8 - 1.2 * 625.0 / 225.0);
    }

    #[test]
    fn two_points_vertex_below_second_point() {
        let pc = PolarCoefficients::from_two_points_with_stationary_point(40.0, 25.0, -2.0, -0.8);
        assert_close(pc.sink_rate(40.0), -2.0);
        assert_close(pc.sink_rate(25.0), -0.8);
        assert_close(pc.sink_rate_derivative(40.0), 0.0);
        assert!(pc.a > 0.0);
    }

    #[test]
    fn two_points_vertex_is_min_sink() {
        let pc = PolarCoefficients::from_two_points_with_stationary_point(22.0, 40.0, -0.60, -1.35);
        let p = pc.min_sink().unwrap();
        assert_close(p.v, 22.0);
        assert_close(p.w, -0.60);
    }

    #[test]
    fn two_points_coincident_speeds_are_invalid() {
        let pc = PolarCoefficients::from_two_points_with_stationary_point(25.0, 25.0, -0.8, -2.0);
        assert_eq!(pc, PolarCoefficients::invalid());
        let err =
            PolarCoefficients::try_from_two_points_with_stationary_point(25.0, 25.0, -0.8, -0.8)
                .unwrap_err();
        assert!(matches!(err, PolarError::SingularInput { .. }));
    }

    #[test]
    fn two_points_non_finite_input() {
        let err = PolarCoefficients::try_from_two_points_with_stationary_point(
            25.0,
            f64::NEG_INFINITY,
            -0.8,
            -2.0,
        )
        .unwrap_err();
        assert_eq!(err, PolarError::NonFiniteInput);
    }

    #[test]
    fn two_points_equal_sinks_at_zero_vertex_is_zero_polar() {
        let err = PolarCoefficients::try_from_two_points_with_stationary_point(0.0, 10.0, 0.0, 0.0)
            .unwrap_err();
        assert_eq!(err, PolarError::ZeroPolar);
    }

    #[test]
    fn fits_are_idempotent() {
        let a = PolarCoefficients::from_three_points(21.0, 31.0, 42.0, -0.65, -0.88, -1.55);
        let b = PolarCoefficients::from_three_points(21.0, 31.0, 42.0, -0.65, -0.88, -1.55);
        assert_eq!(a.a.to_bits(), b.a.to_bits());
        assert_eq!(a.b.to_bits(), b.b.to_bits());
        assert_eq!(a.c.to_bits(), b.c.to_bits());

        let a = PolarCoefficients::from_two_points_with_stationary_point(19.0, 35.0, -0.7, -1.8);
        let b = PolarCoefficients::from_two_points_with_stationary_point(19.0, 35.0, -0.7, -1.8);
        assert_eq!(a.a.to_bits(), b.a.to_bits());
        assert_eq!(a.b.to_bits(), b.b.to_bits());
        assert_eq!(a.c.to_bits(), b.c.to_bits());
    }

    #[test]
    fn error_display() {
        let err = PolarError::SingularInput {
            first: 20.0,
            second: 20.0,
        };
        assert_eq!(err.to_string(), "sample speeds 20 and 20 coincide");
        let err = PolarError::PointCount {
            method: FitMethod::StationaryPoint,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "stationary-point fit needs 2 points, got 3"
        );
        assert!(!err.is_fit_failure());
        let err = PolarError::UnsupportedPointCount(4);
        assert_eq!(err.to_string(), "expected 2 or 3 sample points, got 4");
        assert!(!err.is_fit_failure());
    }
}
