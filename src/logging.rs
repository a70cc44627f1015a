use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "FLASHQUIZ_LOG";
const DEFAULT_DIRECTIVE: &str = "flashquiz=warn";

static INIT: Once = Once::new();

/// Installs the stderr subscriber. Levels come from `FLASHQUIZ_LOG`
/// (e.g. `FLASHQUIZ_LOG=flashquiz=debug`), falling back to warnings only.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
