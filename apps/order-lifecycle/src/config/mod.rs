//! Configuration module for the order lifecycle engine.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation. Every section is optional; an empty document yields the
//! defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_lifecycle::config::{Config, load_config};
//!
//! let config = load_config(Some("order-lifecycle.yaml"))?;
//! println!("partitions: {}", config.runtime.partitions);
//! ```

mod aggregation;
mod observability;
mod publisher;
mod runtime;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use aggregation::AggregationConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use publisher::{PublisherConfig, PublisherKind};
pub use runtime::RuntimeConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),

    /// Environment interpolation could not run.
    #[error("Environment interpolation failed: {0}")]
    InterpolationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Partitioned runtime configuration.
    #[serde(default)]
    pub runtime: RuntimeConfig,
    /// Fold configuration.
    #[serde(default)]
    pub aggregation: AggregationConfig,
    /// Downstream publisher configuration.
    #[serde(default)]
    pub publisher: PublisherConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;
    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml)?;
    let config: Config = if interpolated.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. Unset or empty
/// variables without a default become the empty string.
///
/// # Errors
///
/// Returns error if the interpolation pattern cannot be compiled.
pub fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<Result<regex::Regex, regex::Error>> = OnceLock::new();

    let re = ENV_VAR_REGEX
        .get_or_init(|| regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}"))
        .as_ref()
        .map_err(|e| ConfigError::InterpolationError(e.to_string()))?;

    let result = re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    });

    Ok(result.into_owned())
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.runtime.partitions == 0 {
        return Err(ConfigError::ValidationError(
            "runtime.partitions must be at least 1".to_string(),
        ));
    }

    if config.runtime.channel_capacity == 0 {
        return Err(ConfigError::ValidationError(
            "runtime.channel_capacity must be at least 1".to_string(),
        ));
    }

    if config.publisher.label.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "publisher.label must not be empty".to_string(),
        ));
    }

    let valid_formats = ["text", "json"];
    let format = config.observability.logging.format.to_ascii_lowercase();
    if !valid_formats.contains(&format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_lifecycle::FillLogPolicy;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.runtime.partitions, 4);
        assert_eq!(config.runtime.channel_capacity, 1024);
        assert_eq!(config.aggregation.fill_log, FillLogPolicy::AppendAll);
        assert_eq!(config.publisher.kind, PublisherKind::Log);
        assert_eq!(config.publisher.label, "LIFECYCLES");
        assert_eq!(config.observability.logging.level, "info");
        assert!(!config.observability.logging.is_json());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = match load_config_from_string("") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config.runtime.partitions, 4);
    }

    #[test]
    fn test_load_minimal_config() {
        let yaml = r"
runtime:
  partitions: 2
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load minimal config: {e}"),
        };
        assert_eq!(config.runtime.partitions, 2);
        assert_eq!(config.runtime.channel_capacity, 1024); // Default value
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "kind: ${ORDER_LIFECYCLE_TEST_NONEXISTENT_VAR:-STDOUT}";
        let result = interpolate_env_vars(input).unwrap();
        assert_eq!(result, "kind: STDOUT");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_with_default_uses_existing() {
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input).unwrap();

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "label: ${ORDER_LIFECYCLE_TEST_UNLIKELY_TO_EXIST}";
        let result = interpolate_env_vars(input).unwrap();
        assert_eq!(result, "label: ");
    }

    #[test]
    fn test_validation_zero_partitions() {
        let yaml = r"
runtime:
  partitions: 0
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero partitions");
        };
        assert!(err.to_string().contains("runtime.partitions"));
    }

    #[test]
    fn test_validation_zero_capacity() {
        let yaml = r"
runtime:
  channel_capacity: 0
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero capacity");
        };
        assert!(err.to_string().contains("channel_capacity"));
    }

    #[test]
    fn test_validation_invalid_log_format() {
        let yaml = r"
observability:
  logging:
    format: pretty
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for invalid format");
        };
        assert!(err.to_string().contains("format"));
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
runtime:
  partitions: 8
  channel_capacity: 64

aggregation:
  fill_log: DEDUPLICATE_BY_ID

publisher:
  kind: STDOUT
  label: "ORDERS"

observability:
  logging:
    level: "debug"
    format: "json"
"#;

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };

        assert_eq!(config.runtime.partitions, 8);
        assert_eq!(config.runtime.channel_capacity, 64);
        assert_eq!(config.aggregation.fill_log, FillLogPolicy::DeduplicateById);
        assert_eq!(config.publisher.kind, PublisherKind::Stdout);
        assert_eq!(config.publisher.label, "ORDERS");
        assert_eq!(config.observability.logging.level, "debug");
        assert!(config.observability.logging.is_json());
    }

    #[test]
    fn test_load_config_missing_file() {
        let Err(err) = load_config("/definitely/not/here.yaml") else {
            panic!("expected read error");
        };
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_load_config_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "publisher:\n  kind: NONE").unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.publisher.kind, PublisherKind::None);
    }
}
