//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use polarfit_cli::interfaces::table_row_count;
use polarfit_core::{PolarPoint, DEFAULT_BUGS, DEFAULT_LOADING_RATIO, MAX_TABLE_ROWS};

use crate::errors::AppError;

/// polarfit — fit a glider's quadratic sink-rate polar from sample points.
///
/// Give three `--point V:W` samples for the quadratic through all of them, or
/// two where the first is the minimum-sink speed.
#[derive(Parser, Debug)]
#[command(name = "polarfit", version, about)]
pub struct AppConfig {
    /// Polar sample as SPEED:SINK (sink negative when descending). Repeat 2 or 3 times.
    #[arg(
        short,
        long = "point",
        value_name = "V:W",
        allow_hyphen_values = true,
        required_unless_present = "completion"
    )]
    pub points: Vec<PolarPoint>,

    /// Ratio of actual mass to the polar's reference mass.
    #[arg(long, default_value_t = DEFAULT_LOADING_RATIO, env = "POLARFIT_LOADING")]
    pub loading: f64,

    /// Remaining wing efficiency, 1.0 for clean wings.
    #[arg(long, default_value_t = DEFAULT_BUGS, env = "POLARFIT_BUGS")]
    pub bugs: f64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "POLARFIT_FORMAT")]
    pub format: OutputFormat,

    /// First speed of the sink table.
    #[arg(long, requires_all = ["table_to", "table_step"])]
    pub table_from: Option<f64>,

    /// Last speed of the sink table.
    #[arg(long, requires_all = ["table_from", "table_step"])]
    pub table_to: Option<f64>,

    /// Speed increment of the sink table.
    #[arg(long, requires_all = ["table_from", "table_to"])]
    pub table_step: Option<f64>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only print the coefficients).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write the result as JSON to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Speed range of the sink table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRange {
    pub from: f64,
    pub to: f64,
    pub step: f64,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether a loading or bugs adjustment was requested.
    #[must_use]
    pub fn has_adjustment(&self) -> bool {
        self.loading != DEFAULT_LOADING_RATIO || self.bugs != DEFAULT_BUGS
    }

    /// The requested sink table, if any.
    pub fn table_range(&self) -> Result<Option<TableRange>, AppError> {
        let (Some(from), Some(to), Some(step)) = (self.table_from, self.table_to, self.table_step)
        else {
            return Ok(None);
        };
        if ![from, to, step].iter().all(|x| x.is_finite()) {
            return Err(AppError::Config("table bounds must be finite".into()));
        }
        if step <= 0.0 {
            return Err(AppError::Config(format!(
                "table step must be positive, got {step}"
            )));
        }
        if from > to {
            return Err(AppError::Config(format!(
                "table start {from} is above table end {to}"
            )));
        }
        if table_row_count(from, to, step).is_none() {
            return Err(AppError::Config(format!(
                "table from {from} to {to} in steps of {step} exceeds {MAX_TABLE_ROWS} rows"
            )));
        }
        Ok(Some(TableRange { from, to, step }))
    }

    /// Check option combinations clap cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(2..=3).contains(&self.points.len()) {
            return Err(AppError::Config(format!(
                "expected 2 or 3 --point values, got {}",
                self.points.len()
            )));
        }
        self.table_range()?;
        Ok(())
    }
}
