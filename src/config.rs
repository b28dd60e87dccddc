//! Configuration management for the book library

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the `/Book/*` service lives
#[derive(Debug, Deserialize, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    /// Request timeout; the transport default applies when unset
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatusConfig {
    /// How long a status message stays visible, in milliseconds
    pub ttl_ms: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub status: StatusConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // e.g. LIBRARY__REMOTE__BASE_URL, LIBRARY__STATUS__TTL_MS
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("remote.base_url", env::var("BOOK_API_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl StatusConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:50".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self { ttl_ms: 3000 }
    }
}
