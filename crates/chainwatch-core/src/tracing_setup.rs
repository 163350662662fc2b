//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the Chainwatch tracing subscriber with default settings.
///
/// Reads `CHAINWATCH_LOG` for per-target levels, e.g.
/// `CHAINWATCH_LOG=chainwatch_integrity=debug,chainwatch_prescriptive=info`.
/// Falls back to `chainwatch=info` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Initialize tracing from an observability config section.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CHAINWATCH_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

        let registry = tracing_subscriber::registry().with(filter);
        if config.json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .init();
        }
    });
}
