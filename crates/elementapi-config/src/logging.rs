//! Tracing subscriber setup with environment variable support

use crate::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// Environment variables (in priority order):
/// - `RUST_LOG`: standard filter directives, takes precedence over all
/// - `LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `LOG_FORMAT`: output format (json, pretty)
///
/// Output goes to stderr. Returns `false` when the host already installed a
/// subscriber; that subscriber is left in place.
pub fn initialize(config: &LoggingConfig) -> bool {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|level| level.parse().ok())
        .or_else(|| config.level.parse().ok())
        .unwrap_or(tracing::Level::INFO);

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let format = std::env::var("LOG_FORMAT")
        .ok()
        .and_then(|f| parse_format(&f))
        .unwrap_or(config.format);

    let installed = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .is_ok(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()
            .is_ok(),
    };

    if !installed {
        tracing::debug!("Global subscriber already set; keeping the host's");
    }
    installed
}

fn parse_format(value: &str) -> Option<LogFormat> {
    match value.to_lowercase().as_str() {
        "json" => Some(LogFormat::Json),
        "pretty" | "human" => Some(LogFormat::Pretty),
        _ => None,
    }
}
