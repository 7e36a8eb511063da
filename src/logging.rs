//! Logging Setup
//!
//! Builds the `tracing` subscriber from [`LoggingConfig`]. The writer is
//! supplied by the caller so the browser build can route lines to the
//! console while tests and native consumers use stderr.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Crates whose events are kept
const TARGETS: [&str; 2] = ["trendscope", "trendscope_ui"];

/// Filter keeping our crates at the configured level
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let directives = TARGETS
        .iter()
        .map(|target| format!("{}={}", target, config.level.trim()))
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Invalid log level {:?}: {}", config.level, e);
        EnvFilter::new("trendscope=info,trendscope_ui=info")
    })
}

/// Install the global subscriber writing through `writer`.
///
/// Timestamps are left out: the browser console adds its own and
/// `wasm32-unknown-unknown` has no system clock.
pub fn init_with_writer<W>(config: &LoggingConfig, writer: W) -> Result<(), TryInitError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(env_filter(config));

    match config.format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .without_time(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .without_time(),
            )
            .try_init(),
    }
}

/// Install the global subscriber writing to stderr
pub fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
    init_with_writer(config, std::io::stderr)
}
