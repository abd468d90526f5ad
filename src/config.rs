//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines the
//! response bodies, HTTP cache policies, and default paths. `AppConfig` is the
//! root configuration struct; every field has a default, so the service runs
//! unchanged on `0.0.0.0:5000` when no configuration file exists.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use const_format::formatcp;
use serde::Deserialize;

// =============================================================================
// Response Bodies
// =============================================================================

/// Body returned by the liveness probe
pub const HEALTH_BODY: &str = "ok";

/// Body returned by the root endpoint
pub const GREETING: &str = "Hello from Python healthcheck demo!";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Root greeting - static content, safe to cache briefly
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_HOME: &str = formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

/// Liveness probes must always reach the process
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default listen host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "healthcheck_demo=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Seconds to wait for in-flight connections during graceful shutdown
pub const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> LogFormat {
        LogFormat::Text
    }
}

impl AppConfig {
    /// Read and parse a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        // Fail at startup rather than at bind time
        config.socket_addr()?;

        Ok(config)
    }

    /// Load configuration, falling back to built-in defaults when the file is absent.
    ///
    /// A missing file is only tolerated when `explicit` is false, i.e. the path
    /// is the default one and the operator never asked for a config file.
    pub fn load_or_default<P: AsRef<Path>>(path: P, explicit: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Listen address built from `http.host` and `http.port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.http.host.parse().map_err(|e| {
            ConfigError::Validation(format!("Invalid http.host '{}': {}", self.http.host, e))
        })?;
        Ok(SocketAddr::new(ip, self.http.port))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
