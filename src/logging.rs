//! Logging setup using tracing.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::Error;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the crate logs at
/// `default_level`. Call once at process startup, before the
/// configuration loader runs, so load failures are reported through
/// the subscriber.
///
/// # Errors
///
/// Returns an error if `default_level` is not one of `trace`,
/// `debug`, `info`, `warn`, `error`, or if a global subscriber is
/// already installed.
pub fn init_logging(default_level: &str) -> Result<(), Error> {
    let level = parse_log_level(default_level)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("envrec={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

fn parse_log_level(level: &str) -> Result<Level, Error> {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(Error::Logging(format!(
            "invalid log level '{other}', expected one of: trace, debug, info, warn, error"
        ))),
    }
}
