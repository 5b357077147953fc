//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::PathBuf;
#[cfg(feature = "native")]
use std::path::Path;

use crate::api::DEFAULT_API_BASE;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub devserver: DevServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Where the terminal console keeps its session
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Defaults to `<data_local_dir>/vendorhub/session.json`
    pub path: Option<String>,
}

/// Development backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DevServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    #[cfg(feature = "native")]
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from a file
    #[cfg(feature = "native")]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content, path)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    #[cfg(feature = "native")]
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    #[cfg(feature = "native")]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("vendorhub").join("config.toml")),
            Some(PathBuf::from("/etc/vendorhub/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Resolved session file location
    #[cfg(feature = "native")]
    pub fn session_path(&self) -> PathBuf {
        match &self.session.path {
            Some(path) => PathBuf::from(path),
            None => dirs::data_local_dir()
                .map(|p| p.join("vendorhub"))
                .unwrap_or_else(|| PathBuf::from(".vendorhub"))
                .join("session.json"),
        }
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.api.request_timeout_secs)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `VENDORHUB_*` overrides read through `lookup`. Unparseable
    /// numbers are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = lookup("VENDORHUB_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("VENDORHUB_REQUEST_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = secs;
            }
        }

        if let Some(path) = lookup("VENDORHUB_SESSION_PATH") {
            self.session.path = Some(path);
        }

        // Dev server overrides
        if let Some(host) = lookup("VENDORHUB_DEVSERVER_HOST") {
            self.devserver.host = host;
        }
        if let Some(port) = lookup("VENDORHUB_DEVSERVER_PORT") {
            if let Ok(p) = port.parse() {
                self.devserver.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("VENDORHUB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("VENDORHUB_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# VendorHub Configuration
#
# Environment variables override these settings:
# - VENDORHUB_API_URL
# - VENDORHUB_REQUEST_TIMEOUT
# - VENDORHUB_SESSION_PATH
# - VENDORHUB_DEVSERVER_HOST
# - VENDORHUB_DEVSERVER_PORT
# - VENDORHUB_LOG_LEVEL
# - VENDORHUB_LOG_FORMAT

[api]
# Base URL of the VendorHub REST API
base_url = "http://localhost:5000/api"

# Request timeout in seconds
request_timeout_secs = 30

[session]
# Where the terminal console stores the login token
# path = "~/.local/share/vendorhub/session.json"

[devserver]
# Development backend bind address
host = "127.0.0.1"
port = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_template_parses() {
        let config = Config::from_toml(&generate_default_config(), Path::new("default")).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.devserver.port, 5000);
        assert!(config.session.path.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml(
            "[api]\nbase_url = \"https://vendors.example.com/api\"\n",
            Path::new("partial"),
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://vendors.example.com/api");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("VENDORHUB_API_URL", "http://10.0.0.5:5000/api"),
            ("VENDORHUB_REQUEST_TIMEOUT", "5"),
            ("VENDORHUB_DEVSERVER_PORT", "not-a-port"),
            ("VENDORHUB_SESSION_PATH", "/tmp/s.json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://10.0.0.5:5000/api");
        assert_eq!(config.request_timeout().as_secs(), 5);
        assert_eq!(config.devserver.port, 5000);
        assert_eq!(config.session_path(), PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nformat = \"json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.logging.format, "json");

        let missing = Config::load(&dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
