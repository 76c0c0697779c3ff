//! Log subscriber bootstrap.
//!
//! This server exists to feed log pipelines, so the JSON formatter is the
//! default output; `--pretty-logs` switches to human-readable output for
//! development. Verbosity follows `RUST_LOG` (default `info`).

use crate::server::config::ServerConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_telemetry(config: &ServerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.pretty_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_thread_ids(true)
                    .with_target(false)
                    .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                    .pretty(),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
                    .json()
                    .flatten_event(true),
            )
            .try_init()?;
    }

    Ok(())
}
