//! Text and JSON result presenters.

use crate::interfaces::{FitReport, ResultPresenter};
use crate::output::{format_coefficients, render_report, render_table};
use crate::ui;

/// Human-readable presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, report: &FitReport) {
        let rows = report.table.as_deref().unwrap_or_default();
        if self.quiet {
            println!("{}", format_coefficients(&report.coefficients));
            if !rows.is_empty() {
                print!("{}", render_table(rows));
            }
            return;
        }

        ui::print_header("Glide polar");
        print!("{}", render_report(report, self.verbose));
        if report.valid && !report.coefficients.is_physical() {
            ui::print_warning("coefficients do not describe a descending glider polar");
        }
        if !rows.is_empty() {
            println!();
            ui::print_header("Sink table");
            print!("{}", render_table(rows));
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

/// Machine-readable presenter writing one JSON document per result or error.
pub struct JsonResultPresenter;

impl JsonResultPresenter {
    fn emit<T: serde::Serialize + ?Sized>(value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{s}"),
            Err(e) => tracing::error!(error = %e, "failed to serialize output"),
        }
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_result(&self, report: &FitReport) {
        Self::emit(report);
    }

    fn present_error(&self, error: &str) {
        Self::emit(&serde_json::json!({ "error": error }));
    }
}
