//! # polarfit-core
//!
//! Glide polar coefficient solver. Fits the quadratic sink-rate model
//! `w(v) = a·v² + b·v + c` from three sample points, or from two points
//! where the first is the minimum-sink vertex, and evaluates fitted polars.

mod adjust;
pub mod coefficients;
pub mod constants;
pub mod point;
pub mod solver;

// Re-exports
pub use coefficients::PolarCoefficients;
pub use constants::{
    exit_codes, ABSCISSA_EPSILON, DEFAULT_BUGS, DEFAULT_LOADING_RATIO, MAX_TABLE_ROWS,
};
pub use point::{FitMethod, PolarPoint, PolarShape};
pub use solver::PolarError;

/// Fit a polar from sample points, choosing the method by point count.
///
/// Three points give the quadratic through all of them; two points give the
/// quadratic with its vertex at the first point.
///
/// # Example
/// ```
/// use polarfit_core::{fit, PolarPoint};
///
/// let pc = fit(&[
///     PolarPoint::new(20.0, -1.0),
///     PolarPoint::new(30.0, -1.5),
///     PolarPoint::new(40.0, -2.5),
/// ])
/// .unwrap();
/// assert!((pc.sink_rate(30.0) + 1.5).abs() < 1e-12);
/// ```
pub fn fit(points: &[PolarPoint]) -> Result<PolarCoefficients, PolarError> {
    let method = FitMethod::for_point_count(points.len())
        .ok_or(PolarError::UnsupportedPointCount(points.len()))?;
    method.fit(points)
}
