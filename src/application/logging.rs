//! # Logging Setup
//!
//! Installs the global tracing subscriber: an env filter, a non-blocking file sink
//! and a stdout sink. Both sinks emit JSON when `logging.json` is set, so a journald
//! or log shipper can index the `event` and `service` fields.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::domain::config::LoggingConfig;

/// Installs the subscriber. Keep the returned guard alive until exit or buffered
/// file output is lost.
pub fn init(config: &LoggingConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.directory)
        .with_context(|| format!("Failed to create log directory {}", config.directory))?;

    let file_appender = tracing_appender::rolling::never(&config.directory, &config.file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins over the configured filter
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .context("Invalid logging.filter")?;

    let (json_file, plain_file, json_console, plain_console) = if config.json {
        (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking),
            ),
            None,
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout)),
            None,
        )
    } else {
        (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            ),
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stdout)),
        )
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_file)
        .with(plain_file)
        .with(json_console)
        .with(plain_console)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
