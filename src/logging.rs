//! Structured logging initialization.
//!
//! The dispatcher's display contract is deliberately silent about failures,
//! so the log stream is the only place a refused connection or a non-200
//! status becomes visible. This module wires `tracing` up with an env-filter
//! (`EMOD_LOG`, falling back to `info`), a JSON or pretty format, and an
//! optional daily-rotated log file.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log format: JSON for production, pretty-print for development
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json, // Default to JSON
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Output format for the stderr layer
    pub format: LogFormat,
    /// When set, also write logs to a daily-rotated file in this directory
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    /// Build from environment: `EMOD_LOG_FORMAT` (json|pretty) and
    /// `EMOD_LOG_DIR`.
    pub fn from_env() -> Self {
        Self {
            format: LogFormat::parse(&env::var("EMOD_LOG_FORMAT").unwrap_or_default()),
            log_dir: env::var("EMOD_LOG_DIR").ok().map(PathBuf::from),
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Returns a guard for the non-blocking file writer when file logging is
/// enabled; hold it for the lifetime of the process or buffered log lines
/// are lost on exit.
///
/// # Errors
///
/// Fails if a subscriber is already installed for this process.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env("EMOD_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "emotion-dispatch.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    }
    .context("failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parse_defaults_to_json() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("PRETTY"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Json);
    }
}
