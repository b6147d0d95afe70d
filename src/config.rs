//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, one event per line
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Version reported in logs and the OpenAPI document
    pub api_version: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Serve the interactive API reference at /docs
    pub docs_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "1025".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let api_version =
            lookup("API_VERSION").unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
        if api_version.trim().is_empty() {
            return Err(ConfigError::MissingEnv("API_VERSION"));
        }

        let log_format = lookup("LOG_FORMAT")
            .unwrap_or_else(|| "pretty".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("LOG_FORMAT"))?;

        let docs_enabled = match lookup("DOCS_ENABLED") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidValue("DOCS_ENABLED"))?,
            None => environment != "production",
        };

        Ok(Self {
            host,
            port,
            environment,
            api_version,
            log_format,
            docs_enabled,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 1025);
        assert_eq!(config.environment, "development");
        assert_eq!(config.api_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.docs_enabled);
        assert!(!config.is_production());
    }

    #[test]
    fn test_production_disables_docs_by_default() {
        let config = load(&[("ENVIRONMENT", "production")]).unwrap();
        assert!(config.is_production());
        assert!(!config.docs_enabled);

        let config = load(&[("ENVIRONMENT", "production"), ("DOCS_ENABLED", "true")]).unwrap();
        assert!(config.docs_enabled);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("API_VERSION", "2.1.0"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_version, "2.1.0");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("PORT", "not-a-port")]),
            Err(ConfigError::InvalidValue("PORT"))
        ));
        assert!(matches!(
            load(&[("LOG_FORMAT", "xml")]),
            Err(ConfigError::InvalidValue("LOG_FORMAT"))
        ));
        assert!(matches!(
            load(&[("DOCS_ENABLED", "maybe")]),
            Err(ConfigError::InvalidValue("DOCS_ENABLED"))
        ));
        assert!(matches!(
            load(&[("API_VERSION", " ")]),
            Err(ConfigError::MissingEnv("API_VERSION"))
        ));
    }
}
