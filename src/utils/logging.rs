// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

// The HTML parser reports every markup irregularity; saved result pages have plenty.
const DEFAULT_DIRECTIVES: &str = "info,html5ever=error,selectors=error";

/// Initializes the tracing subscriber.
/// `RUST_LOG` overrides the default directives when set.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("Logging setup complete.");
}
