//! Error handling and exit codes.

use polarfit_core::constants::exit_codes;
use polarfit_core::PolarError;

/// Application-level errors that are not fit failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid combination of options.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Map an error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(polar) = err.downcast_ref::<PolarError>() {
        return polar_exit_code(polar);
    }
    match err.downcast_ref::<AppError>() {
        Some(AppError::Config(_)) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    }
}

fn polar_exit_code(err: &PolarError) -> i32 {
    match err {
        PolarError::SingularInput { .. }
        | PolarError::NonFiniteInput
        | PolarError::NonFiniteResult
        | PolarError::ZeroPolar
        | PolarError::InvalidPolar => exit_codes::ERROR_FIT,
        PolarError::PointCount { .. }
        | PolarError::UnsupportedPointCount(_)
        | PolarError::InvalidPoint(_)
        | PolarError::InvalidAdjustment(_) => exit_codes::ERROR_CONFIG,
    }
}
