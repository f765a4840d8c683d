use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "income_tracker=warn";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// Events go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` overrides the default `income_tracker=warn` filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
