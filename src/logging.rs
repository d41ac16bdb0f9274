//! # Logging Setup
//!
//! Installs a process-wide tracing subscriber with environment-driven
//! filtering. Hosts that already set up their own subscriber can skip this;
//! initialization is idempotent either way.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize console logging, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_filter(filter));

        if subscriber.try_init().is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }
    });
}
