//! Subscriber setup for binaries and tests embedding the core.
//!
//! Library code only emits events; nothing here runs unless a caller asks.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Environment variable whose directive overrides the configured level.
pub const LOG_ENV_VAR: &str = "BETAKASIR_LOG";

/// Build the filter: `BETAKASIR_LOG` if set and valid, else `default_directive`,
/// else `warn`.
pub fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a global fmt subscriber. Returns `false` when one is already set.
pub fn init_tracing(settings: &LoggingSettings) -> bool {
    tracing_subscriber::registry()
        .with(build_filter(settings.effective_level()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .is_ok()
}
