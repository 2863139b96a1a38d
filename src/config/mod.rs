//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL; when absent the server runs on the in-memory store
    pub url: Option<String>,

    pub max_connections: u32,

    pub acquire_timeout_secs: u64,

    /// Apply the embedded migrations on startup
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
            acquire_timeout_secs: 5,
            run_migrations: true,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on (e.g., "127.0.0.1:3000")
    pub bind_addr: String,

    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,

    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            log_filter: "biztime=info,tower_http=info".to_string(),
            database: DatabaseConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("failed to parse config {}", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the file at `path` (or defaults when `None`), then apply
    /// overrides from the process environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a variable lookup
    ///
    /// Recognized variables: `BIZTIME_BIND_ADDR`, `DATABASE_URL`, `RUST_LOG`.
    /// Variables set to an empty string are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());
        if let Some(addr) = lookup("BIZTIME_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = Some(url);
        }
        if let Some(filter) = lookup("RUST_LOG") {
            self.log_filter = filter;
        }
        self
    }
}
