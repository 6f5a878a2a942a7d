//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::constants::{
    DEFAULT_ENVIRONMENT, DEFAULT_LOG_FILTER, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub environment: Environment,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Upstream API configuration
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the authentication service (login, logout, profile, status)
    pub auth_api_url: Url,
    /// Base URL of the contest and submission service
    pub contest_api_url: Url,
    /// Optional timeout for outbound calls; `None` means no timeout
    pub timeout: Option<Duration>,
}

/// Deployment environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Production,
    NonProduction(String),
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            other => Self::NonProduction(other.to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Production => "production",
            Self::NonProduction(name) => name,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_lookup(&lookup)?,
            upstream: UpstreamConfig::from_lookup(&lookup)?,
            environment: Environment::parse(
                &lookup("APP_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            ),
        })
    }
}

impl ServerConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(_) => return Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        };

        Ok(Self {
            host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            port: lookup("SERVER_PORT")
                .unwrap_or_else(|| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_format,
        })
    }
}

impl UpstreamConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_raw = lookup("AUTH_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing("AUTH_API_URL".to_string()))?;
        let auth_api_url = parse_base_url("AUTH_API_URL", &auth_raw)?;

        let contest_api_url = match lookup("CONTEST_API_URL").filter(|v| !v.trim().is_empty()) {
            Some(raw) => parse_base_url("CONTEST_API_URL", &raw)?,
            None => auth_api_url.clone(),
        };

        let timeout = match lookup("UPSTREAM_TIMEOUT_SECONDS").filter(|v| !v.trim().is_empty()) {
            Some(raw) => {
                let seconds: u64 = raw.trim().parse().map_err(|_| {
                    ConfigError::InvalidValue("UPSTREAM_TIMEOUT_SECONDS".to_string())
                })?;
                Some(Duration::from_secs(seconds))
            }
            None => None,
        };

        Ok(Self {
            auth_api_url,
            contest_api_url,
            timeout,
        })
    }
}

fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidValue(key.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }
    Ok(url)
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[("AUTH_API_URL", "https://auth.example.com")]).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, LogFormat::Pretty);
        assert!(config.environment.is_production());
        assert!(config.upstream.timeout.is_none());
    }

    #[test]
    fn test_contest_url_defaults_to_auth_url() {
        let config = load(&[("AUTH_API_URL", "https://auth.example.com/v1")]).unwrap();
        assert_eq!(config.upstream.contest_api_url, config.upstream.auth_api_url);

        let config = load(&[
            ("AUTH_API_URL", "https://auth.example.com"),
            ("CONTEST_API_URL", "https://contests.example.com/api"),
        ])
        .unwrap();
        assert_eq!(config.upstream.contest_api_url.host_str(), Some("contests.example.com"));
    }

    #[test]
    fn test_missing_and_invalid_values() {
        assert!(matches!(load(&[]), Err(ConfigError::Missing(_))));
        assert!(matches!(
            load(&[("AUTH_API_URL", "not a url")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("AUTH_API_URL", "ftp://auth.example.com")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("AUTH_API_URL", "https://a.example.com"), ("SERVER_PORT", "eighty")]),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_environment_parsing() {
        assert!(Environment::parse("Production").is_production());
        assert!(Environment::parse("prod").is_production());
        assert!(!Environment::parse("development").is_production());
        assert_eq!(Environment::parse("staging").name(), "staging");
    }

    #[test]
    fn test_timeout_parsing() {
        let config = load(&[
            ("AUTH_API_URL", "https://auth.example.com"),
            ("UPSTREAM_TIMEOUT_SECONDS", "15"),
        ])
        .unwrap();
        assert_eq!(config.upstream.timeout, Some(Duration::from_secs(15)));
    }
}
