//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Development mode: service worker registration is suppressed
    #[serde(default)]
    pub dev_mode: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl ServerConfig {
    /// Socket address string for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dev_mode: false,
        }
    }
}

/// Identity service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the identity service; unset means sessions are served
    /// from an in-memory table instead of a remote provider
    #[serde(default)]
    pub base_url: Option<String>,

    /// Service API key, sent as the `apikey` header
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_auth_timeout")]
    pub request_timeout_ms: u64,

    /// Name of the session cookie issued by the login flow
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

fn default_auth_timeout() -> u64 {
    5000
}

fn default_session_cookie() -> String {
    crate::web::session::DEFAULT_SESSION_COOKIE.to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            request_timeout_ms: default_auth_timeout(),
            session_cookie: default_session_cookie(),
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
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        // Try default config locations
        let config_paths = [
            dirs::config_dir().map(|p| p.join("gilnokie").join("config.toml")),
            Some(PathBuf::from("/etc/gilnokie/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        // Fall back to environment-only config
        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Server overrides
        if let Ok(host) = std::env::var("GILNOKIE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("GILNOKIE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(dev) = std::env::var("GILNOKIE_DEV") {
            self.server.dev_mode = dev.to_lowercase() != "false" && dev != "0";
        }

        // Identity service overrides
        if let Ok(url) = std::env::var("GILNOKIE_AUTH_URL") {
            self.auth.base_url = Some(url);
        }
        if let Ok(key) = std::env::var("GILNOKIE_AUTH_KEY") {
            self.auth.api_key = Some(key);
        }

        // Logging overrides
        if let Ok(level) = std::env::var("GILNOKIE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("GILNOKIE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
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
    r#"# Gilnokie GMS Configuration
#
# Environment variables override these settings:
# - GILNOKIE_HOST
# - GILNOKIE_PORT
# - GILNOKIE_DEV
# - GILNOKIE_AUTH_URL
# - GILNOKIE_AUTH_KEY
# - GILNOKIE_LOG_LEVEL
# - GILNOKIE_LOG_FORMAT

[server]
# Bind host
host = "0.0.0.0"

# Bind port
port = 8090

# Development mode: service worker registration is disabled
dev_mode = false

[auth]
# Identity service base URL
# Leave unset to run with an in-memory session table (development only)
# base_url = "http://localhost:9999"

# Service API key, sent as the `apikey` header
# api_key = ""

# Identity request timeout (ms)
request_timeout_ms = 5000

# Name of the session cookie issued by the login flow
session_cookie = "gms_session"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
