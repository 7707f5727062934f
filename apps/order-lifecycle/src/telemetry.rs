//! Tracing Setup
//!
//! Installs a global `tracing` subscriber writing to stderr, so stdout stays
//! free for published state.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives; falls back to `observability.logging.level`
//! - `observability.logging.format`: `text` (default) or `json`
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_lifecycle::telemetry::init_telemetry;
//!
//! init_telemetry(&config.observability.logging)?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Tracing initialization failure.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Filter directives could not be parsed.
    #[error("Invalid log filter '{directive}': {message}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber is already installed.
    #[error("Failed to install tracing subscriber: {message}")]
    InitFailed {
        /// Error message.
        message: String,
    },
}

/// Build the filter from `RUST_LOG`, else from the configured level.
///
/// # Errors
///
/// Returns error if the configured level is not a valid directive.
pub fn build_filter(logging: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&logging.level).map_err(|e| TelemetryError::InvalidFilter {
        directive: logging.level.clone(),
        message: e.to_string(),
    })
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns error if the filter is invalid or a subscriber is already set.
pub fn init_telemetry(logging: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(logging)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = if logging.is_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| TelemetryError::InitFailed {
        message: e.to_string(),
    })?;

    tracing::debug!(format = %logging.format, level = %logging.level, "Tracing initialized");
    Ok(())
}
