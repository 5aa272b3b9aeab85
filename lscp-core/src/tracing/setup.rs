//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the LSCP tracing/logging system.
///
/// Reads the `LSCP_LOG` environment variable for per-subsystem log
/// levels, e.g. `LSCP_LOG=lscp_ensemble=debug`.
///
/// Falls back to `lscp=info` if `LSCP_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("LSCP_LOG").unwrap_or_else(|_| EnvFilter::new("lscp=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
