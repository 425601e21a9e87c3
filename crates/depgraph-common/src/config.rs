use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

// --- Constants for Default Configuration ---
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 5000;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/criticality_score";
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.into(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.into(),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Default settings
            .set_default("http.host", DEFAULT_HTTP_HOST)?
            .set_default("http.port", DEFAULT_HTTP_PORT as i64)?
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .set_default("database.max_connections", DEFAULT_DATABASE_MAX_CONNECTIONS as i64)?
            .set_default("database.acquire_timeout_secs", DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS)?

            // File: config.toml
            .add_source(File::with_name("config").required(false))

            // Environment: DEPGRAPH_HTTP__PORT=8080 -> http.port=8080
            .add_source(Environment::with_prefix("DEPGRAPH").separator("__"))

            // Legacy ENV overrides (for backward compatibility with older deployments)
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .set_override_option("http.port", env::var("PORT").ok().and_then(|v| v.parse::<u64>().ok()))?

            .build()?;

        s.try_deserialize()
    }

    /// Address string for the HTTP listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }
}
