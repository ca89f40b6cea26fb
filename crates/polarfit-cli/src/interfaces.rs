//! Presentation interfaces and the data they present.

use serde::Serialize;

use polarfit_core::{FitMethod, PolarCoefficients, PolarPoint, MAX_TABLE_ROWS};

/// Trait for presenting fit results to the user.
pub trait ResultPresenter {
    /// Present a fit result, including its sink table if it has one.
    fn present_result(&self, report: &FitReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Loading and bugs factors applied after fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Adjustment {
    pub loading_ratio: f64,
    pub bugs: f64,
}

/// Everything worth showing about one fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    pub method: FitMethod,
    pub points: Vec<PolarPoint>,
    pub coefficients: PolarCoefficients,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<Adjustment>,
    pub min_sink: Option<PolarPoint>,
    pub best_glide: Option<PolarPoint>,
    pub best_glide_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Vec<TableRow>>,
}

impl FitReport {
    /// Build a report, deriving the evaluation fields from `coefficients`.
    #[must_use]
    pub fn new(method: FitMethod, points: Vec<PolarPoint>, coefficients: PolarCoefficients) -> Self {
        let best_glide = coefficients.best_glide();
        Self {
            method,
            points,
            coefficients,
            valid: coefficients.is_valid(),
            adjustment: None,
            min_sink: coefficients.min_sink(),
            best_glide,
            best_glide_ratio: best_glide.and_then(|p| coefficients.glide_ratio(p.v)),
            table: None,
        }
    }

    /// Attach the adjustment that produced `coefficients`.
    #[must_use]
    pub fn with_adjustment(mut self, loading_ratio: f64, bugs: f64) -> Self {
        self.adjustment = Some(Adjustment {
            loading_ratio,
            bugs,
        });
        self
    }

    /// Attach a speed sweep over `coefficients`.
    #[must_use]
    pub fn with_table(mut self, rows: Vec<TableRow>) -> Self {
        self.table = Some(rows);
        self
    }
}

/// One row of a speed sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableRow {
    pub v: f64,
    pub w: f64,
    pub glide_ratio: Option<f64>,
}

/// Number of rows in the sweep from `from` to `to` inclusive in steps of `step`.
///
/// `None` when the range is not finite, the step is not positive, `from` is
/// above `to`, or the sweep would exceed [`MAX_TABLE_ROWS`].
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn table_row_count(from: f64, to: f64, step: f64) -> Option<usize> {
    if !from.is_finite() || !to.is_finite() || !step.is_finite() {
        return None;
    }
    if step <= 0.0 || from > to {
        return None;
    }
    // The slack keeps the last row when rounding leaves the span just short of a step.
    let intervals = ((to - from) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_TABLE_ROWS as f64 {
        return None;
    }
    (intervals as usize).checked_add(1)
}

/// Evaluate `coefficients` from `from` to `to` inclusive in steps of `step`.
///
/// Returns an empty table for an invalid polar or a range
/// [`table_row_count`] rejects.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sink_table(coefficients: &PolarCoefficients, from: f64, to: f64, step: f64) -> Vec<TableRow> {
    if !coefficients.is_valid() {
        return Vec::new();
    }
    let Some(count) = table_row_count(from, to, step) else {
        return Vec::new();
    };
    (0..count)
        .map(|i| {
            let v = from + step * i as f64;
            TableRow {
                v,
                w: coefficients.sink_rate(v),
                glide_ratio: coefficients.glide_ratio(v),
            }
        })
        .collect()
}
