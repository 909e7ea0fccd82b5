//! Configuration for the ElementAPI plugin
//!
//! Values are layered, highest priority first:
//!
//! 1. Environment variables (`ELEMENTAPI_LOGGING__LEVEL=debug`)
//! 2. `<data_dir>/config.toml`
//! 3. Built-in defaults
//!
//! The set of supported host versions is fixed by the adapters compiled into
//! the plugin and cannot be configured here.

pub mod logging;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file inside the plugin data directory
pub const CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "ELEMENTAPI_";

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format for development
    #[default]
    Pretty,
    /// Structured JSON format for log shippers
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ElementsConfig {
    /// Namespace of the item tag that stores an item's element
    pub namespace: String,
}

impl Default for ElementsConfig {
    fn default() -> Self {
        Self {
            namespace: "elementapi".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ElementApiConfig {
    pub logging: LoggingConfig,
    pub elements: ElementsConfig,
}

impl ElementApiConfig {
    /// Load configuration for a plugin whose data directory is `data_dir`.
    ///
    /// A missing `config.toml` is not an error; defaults apply.
    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = data_dir.join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!(path = %path.display(), "Loading TOML configuration");
        }

        let config: ElementApiConfig = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(&path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;

        config.validate()?;

        tracing::debug!(
            level = %config.logging.level,
            format = ?config.logging.format,
            namespace = %config.elements.namespace,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check values serde cannot check
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::invalid(format!(
                "Invalid log level '{}', must be one of: {}",
                self.logging.level,
                VALID_LEVELS.join(", ")
            )));
        }

        let namespace = &self.elements.namespace;
        let valid_namespace = !namespace.is_empty()
            && namespace.chars().all(|c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
            });
        if !valid_namespace {
            return Err(ConfigError::invalid(format!(
                "Invalid element namespace '{}': use lowercase letters, digits, '_', '-' or '.'",
                namespace
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn load(jail: &Jail) -> figment::Result<ElementApiConfig> {
        ElementApiConfig::load(jail.directory()).map_err(|e| e.to_string().into())
    }

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|jail| {
            let config = load(jail)?;
            assert_eq!(config, ElementApiConfig::default());
            assert_eq!(config.logging.level, "info");
            assert_eq!(config.elements.namespace, "elementapi");
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                [logging]
                format = "json"

                [elements]
                namespace = "myelements"
                "#,
            )?;

            let config = load(jail)?;
            assert_eq!(config.logging.format, LogFormat::Json);
            assert_eq!(config.logging.level, "info");
            assert_eq!(config.elements.namespace, "myelements");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "[logging]\nlevel = \"warn\"\n")?;
            jail.set_env("ELEMENTAPI_LOGGING__LEVEL", "debug");

            let config = load(jail)?;
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "[logging]\nlevel = \"loud\"\n")?;

            let err = ElementApiConfig::load(jail.directory()).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
            assert!(err.to_string().contains("loud"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_namespace_is_rejected() {
        let mut config = ElementApiConfig::default();
        config.elements.namespace = "Element API".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file_is_load_error() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "[logging\nlevel = ")?;

            let err = ElementApiConfig::load(jail.directory()).unwrap_err();
            assert!(matches!(err, ConfigError::Load(_)));
            Ok(())
        });
    }
}
