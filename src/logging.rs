//! tracing subscriber setup.
//!
//! Logs always go to stderr so that stdout output and the terminal UI stay
//! clean. `RUST_LOG` takes precedence over the `--log-level` flag.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::{GanttError, Result};
use crate::fields::LogFormat;

/// Install the global subscriber.
pub fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| GanttError::Logging(e.to_string()))?;

    let fmt_layer = match format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| GanttError::Logging(e.to_string()))?;

    tracing::debug!(level, ?format, "logging initialised");
    Ok(())
}
