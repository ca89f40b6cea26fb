//! Polar sample points and reference shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coefficients::PolarCoefficients;
use crate::solver::PolarError;

/// One sample of a glide polar: horizontal speed `v` and sink rate `w`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    /// Horizontal airspeed.
    pub v: f64,
    /// Sink rate (negative when descending).
    pub w: f64,
}

impl PolarPoint {
    #[must_use]
    pub const fn new(v: f64, w: f64) -> Self {
        Self { v, w }
    }

    /// Whether both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.v.is_finite() && self.w.is_finite()
    }
}

impl fmt::Display for PolarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.v, self.w)
    }
}

/// Parses the `V:W` text form, e.g. `22:-0.62`.
impl FromStr for PolarPoint {
    type Err = PolarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (v, w) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| PolarError::InvalidPoint(format!("expected V:W, got '{s}'")))?;
        let v: f64 = v
            .trim()
            .parse()
            .map_err(|_| PolarError::InvalidPoint(format!("bad speed '{v}' in '{s}'")))?;
        let w: f64 = w
            .trim()
            .parse()
            .map_err(|_| PolarError::InvalidPoint(format!("bad sink rate '{w}' in '{s}'")))?;
        let point = Self::new(v, w);
        if !point.is_finite() {
            return Err(PolarError::InvalidPoint(format!("non-finite value in '{s}'")));
        }
        Ok(point)
    }
}

/// A reference polar described by three sample points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarShape {
    pub points: [PolarPoint; 3],
}

impl PolarShape {
    #[must_use]
    pub const fn new(points: [PolarPoint; 3]) -> Self {
        Self { points }
    }

    /// Fit the quadratic through the three points.
    ///
    /// Returns the invalid sentinel when the points do not determine a polar.
    #[must_use]
    pub fn coefficients(&self) -> PolarCoefficients {
        let [p1, p2, p3] = self.points;
        PolarCoefficients::from_three_points(p1.v, p2.v, p3.v, p1.w, p2.w, p3.w)
    }

    /// Fallible variant of [`PolarShape::coefficients`].
    pub fn try_coefficients(&self) -> Result<PolarCoefficients, PolarError> {
        let [p1, p2, p3] = self.points;
        PolarCoefficients::try_from_three_points(p1.v, p2.v, p3.v, p1.w, p2.w, p3.w)
    }
}

/// Which fitting operation produced a set of coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMethod {
    /// Quadratic through three sample points.
    ThreePoint,
    /// Quadratic through two points with the first one as the vertex.
    StationaryPoint,
}

impl FitMethod {
    /// Pick the method for a number of sample points.
    #[must_use]
    pub fn for_point_count(count: usize) -> Option<Self> {
        match count {
            3 => Some(Self::ThreePoint),
            2 => Some(Self::StationaryPoint),
            _ => None,
        }
    }

    /// Fit `points` with this method.
    pub fn fit(self, points: &[PolarPoint]) -> Result<PolarCoefficients, PolarError> {
        match (self, points) {
            (Self::ThreePoint, [p1, p2, p3]) => {
                PolarCoefficients::try_from_three_points(p1.v, p2.v, p3.v, p1.w, p2.w, p3.w)
            }
            (Self::StationaryPoint, [p1, p2]) => {
                PolarCoefficients::try_from_two_points_with_stationary_point(
                    p1.v, p2.v, p1.w, p2.w,
                )
            }
            _ => Err(PolarError::PointCount {
                method: self,
                got: points.len(),
            }),
        }
    }
}

impl fmt::Display for FitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreePoint => write!(f, "three-point"),
            Self::StationaryPoint => write!(f, "stationary-point"),
        }
    }
}
