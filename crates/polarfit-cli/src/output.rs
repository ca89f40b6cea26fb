//! CLI output formatting.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use polarfit_core::{PolarCoefficients, PolarPoint};

use crate::interfaces::{FitReport, TableRow};

/// Format a coefficient with enough significant digits to reproduce the fit.
#[must_use]
pub fn format_coefficient(x: f64) -> String {
    if x == 0.0 {
        "0".to_string()
    } else if x.abs() >= 1e-3 && x.abs() < 1e6 {
        format!("{x:.9}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        format!("{x:.9e}")
    }
}

/// Format the three coefficients on one line, as printed in quiet mode.
#[must_use]
pub fn format_coefficients(pc: &PolarCoefficients) -> String {
    format!(
        "{} {} {}",
        format_coefficient(pc.a),
        format_coefficient(pc.b),
        format_coefficient(pc.c)
    )
}

/// Format a point as `v = …, w = …`.
#[must_use]
pub fn format_point(p: &PolarPoint) -> String {
    format!("v = {:.2}, w = {:.3}", p.v, p.w)
}

/// Render the human-readable summary of a fit.
#[must_use]
pub fn render_report(report: &FitReport, verbose: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Method: {}", report.method);
    if verbose {
        for (i, p) in report.points.iter().enumerate() {
            let _ = writeln!(out, "Point {}: {}", i + 1, format_point(p));
        }
    }
    if let Some(adj) = report.adjustment {
        let _ = writeln!(
            out,
            "Adjustment: loading ratio {}, bugs {}",
            adj.loading_ratio, adj.bugs
        );
    }
    if !report.valid {
        let _ = writeln!(out, "Polar: invalid (no polar fitted)");
        return out;
    }

    let pc = &report.coefficients;
    let _ = writeln!(out, "a = {}", format_coefficient(pc.a));
    let _ = writeln!(out, "b = {}", format_coefficient(pc.b));
    let _ = writeln!(out, "c = {}", format_coefficient(pc.c));

    match report.min_sink {
        Some(p) => {
            let _ = writeln!(out, "Minimum sink: {}", format_point(&p));
        }
        None => {
            let _ = writeln!(out, "Minimum sink: none (polar does not open downward)");
        }
    }
    if let (Some(p), Some(ratio)) = (report.best_glide, report.best_glide_ratio) {
        let _ = writeln!(out, "Best glide: {} (L/D {ratio:.1})", format_point(&p));
    }
    if verbose && !pc.is_physical() {
        let _ = writeln!(out, "Note: coefficients do not describe a descending glider polar");
    }
    out
}

/// Render a speed sweep as an aligned table.
#[must_use]
pub fn render_table(rows: &[TableRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>10} {:>10} {:>8}", "speed", "sink", "L/D");
    let _ = writeln!(out, "{:-<30}", "");
    for row in rows {
        let ratio = row
            .glide_ratio
            .map_or_else(|| "-".to_string(), |r| format!("{r:.1}"));
        let _ = writeln!(out, "{:>10.2} {:>10.3} {:>8}", row.v, row.w, ratio);
    }
    out
}

/// Write a report to a file as pretty JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, report: &FitReport) -> io::Result<()> {
    let content = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "wrote fit report");
    Ok(())
}
