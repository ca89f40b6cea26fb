//! polarfit — fit and evaluate glider polars.

use polarfit_lib::{app, config, errors};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        app::presenter_for(&config).present_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
