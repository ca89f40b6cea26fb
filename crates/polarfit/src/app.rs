//! Application entry point and dispatch.

use anyhow::{Context, Result};

use polarfit_cli::interfaces::sink_table;
use polarfit_cli::output::write_to_file;
use polarfit_cli::{CLIResultPresenter, FitReport, JsonResultPresenter, ResultPresenter};
use polarfit_core::FitMethod;

use crate::config::{AppConfig, OutputFormat};
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        polarfit_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    config.validate()?;
    let mut report = fit_report(config)?;

    if let Some(range) = config.table_range()? {
        let rows = sink_table(&report.coefficients, range.from, range.to, range.step);
        tracing::debug!(rows = rows.len(), "evaluated sink table");
        report = report.with_table(rows);
    }

    presenter_for(config).present_result(&report);

    if let Some(ref path) = config.output {
        write_to_file(path, &report)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}

/// Fit the configured points and apply any loading/bugs adjustment.
pub fn fit_report(config: &AppConfig) -> Result<FitReport> {
    let method = FitMethod::for_point_count(config.points.len()).ok_or_else(|| {
        AppError::Config(format!(
            "expected 2 or 3 --point values, got {}",
            config.points.len()
        ))
    })?;
    tracing::debug!(%method, points = config.points.len(), "fitting polar");

    let fitted = method.fit(&config.points).inspect_err(|e| {
        tracing::warn!(error = %e, "polar fit failed");
    })?;
    tracing::info!(a = fitted.a, b = fitted.b, c = fitted.c, "polar fitted");

    if !config.has_adjustment() {
        return Ok(FitReport::new(method, config.points.clone(), fitted));
    }

    let adjusted = fitted.adjusted(config.loading, config.bugs)?;
    tracing::info!(
        loading = config.loading,
        bugs = config.bugs,
        "applied polar adjustment"
    );
    Ok(FitReport::new(method, config.points.clone(), adjusted)
        .with_adjustment(config.loading, config.bugs))
}

/// Pick the presenter for the configured output format.
#[must_use]
pub fn presenter_for(config: &AppConfig) -> Box<dyn ResultPresenter> {
    match config.format {
        OutputFormat::Text => Box::new(CLIResultPresenter::new(config.verbose, config.quiet)),
        OutputFormat::Json => Box::new(JsonResultPresenter),
    }
}
