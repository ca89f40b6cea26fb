//! Constants for polar fitting tolerances and process exit codes.

/// Relative tolerance under which two sample speeds count as coincident.
///
/// Two abscissas `x` and `y` are coincident when
/// `|x - y| <= ABSCISSA_EPSILON * max(1, |x|, |y|)`.
pub const ABSCISSA_EPSILON: f64 = 1e-9;

/// Default loading ratio (actual mass equals reference mass).
pub const DEFAULT_LOADING_RATIO: f64 = 1.0;

/// Default bugs factor (clean wings).
pub const DEFAULT_BUGS: f64 = 1.0;

/// Largest sink table the CLI will evaluate.
pub const MAX_TABLE_ROWS: usize = 10_000;

/// Process exit codes used by the `polarfit` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, output).
    pub const ERROR_GENERIC: i32 = 1;
    /// The sample points did not determine a polar (2 is taken by clap usage errors).
    pub const ERROR_FIT: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

/// Whether two sample speeds are too close to be told apart by the solver.
#[must_use]
pub(crate) fn abscissas_coincide(x: f64, y: f64) -> bool {
    let scale = 1.0_f64.max(x.abs()).max(y.abs());
    (x - y).abs() <= ABSCISSA_EPSILON * scale
}
