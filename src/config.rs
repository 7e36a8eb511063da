//! Configuration System
//!
//! Backend locations and log level, read from a TOML file embedded at
//! build time. Which backend is used is chosen at build time too: the
//! `TRENDSCOPE_ENV` variable if set, otherwise the build profile.

use serde::Deserialize;
use std::str::FromStr;

use crate::error::ConfigError;

/// Config file compiled into the binary
const EMBEDDED_CONFIG: &str = include_str!("../config/trendscope.toml");

/// Deployment target of the build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Environment selected for this build
    pub fn from_build() -> Self {
        match option_env!("TRENDSCOPE_ENV").map(str::parse::<Environment>) {
            Some(Ok(env)) => env,
            _ => Self::from_profile(),
        }
    }

    fn from_profile() -> Self {
        if cfg!(debug_assertions) {
            Environment::Development
        } else {
            Environment::Production
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Trending backend locations
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_production_url")]
    pub production_url: String,

    #[serde(default = "default_development_url")]
    pub development_url: String,
}

fn default_production_url() -> String {
    // Placeholder until the aggregation service has a real deployment
    "https://github-stats-api.your-worker.workers.dev".to_string()
}

fn default_development_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            production_url: default_production_url(),
            development_url: default_development_url(),
        }
    }
}

impl ApiConfig {
    /// Base URL for `env`, without trailing slash
    pub fn base_url(&self, env: Environment) -> String {
        let url = match env {
            Environment::Production => &self.production_url,
            Environment::Development => &self.development_url,
        };
        url.trim_end_matches('/').to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Line format of log output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Configuration compiled into the binary, or defaults if it is invalid
    pub fn embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid embedded config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Backend base URL for the environment of this build
    pub fn api_base(&self) -> String {
        self.api.base_url(Environment::from_build())
    }
}
