//! # polarfit-cli
//!
//! Result reports, text and JSON presentation, and shell completion.

pub mod completion;
pub mod interfaces;
pub mod output;
pub mod presenter;
pub mod ui;

pub use interfaces::{FitReport, ResultPresenter, TableRow};
pub use presenter::{CLIResultPresenter, JsonResultPresenter};
