//! Configuration management for the calculator server.
//!
//! Configuration is assembled from defaults and `MCP_*` environment
//! variables (a `.env` file is honoured). Values that fail to parse fall
//! back to their defaults with a warning.

use super::transport::TransportConfig;
use crate::domains::calc::context::{DEFAULT_MAX_PRECISION, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Main configuration structure for the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Calculation settings.
    pub calculator: CalculatorConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Calculation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Significant digits used until a client calls `set_precision`.
    pub default_precision: u32,

    /// Largest precision `set_precision` accepts.
    pub max_precision: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "decimal-calculator".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_precision: DEFAULT_PRECISION,
            max_precision: DEFAULT_MAX_PRECISION,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Load logging settings from `MCP_LOG_LEVEL` and `MCP_LOG_TIMESTAMPS`.
    ///
    /// Read before any subscriber exists, so nothing here can warn:
    /// timestamps are on unless the variable is `false`, `0` or `no`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        if let Ok(raw) = std::env::var("MCP_LOG_TIMESTAMPS") {
            logging.with_timestamps =
                !matches!(raw.trim().to_lowercase().as_str(), "false" | "0" | "no");
        }
        logging
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Invalid values are reported with `warn!`, so install the subscriber
    /// (from [`LoggingConfig::from_env`]) before calling this.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_DEFAULT_PRECISION`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        let calculator = &mut config.calculator;
        calculator.max_precision = env_or("MCP_MAX_PRECISION", calculator.max_precision);
        if calculator.max_precision == 0 {
            warn!(
                "MCP_MAX_PRECISION must be at least 1, using {}",
                DEFAULT_MAX_PRECISION
            );
            calculator.max_precision = DEFAULT_MAX_PRECISION;
        }

        calculator.default_precision =
            env_or("MCP_DEFAULT_PRECISION", calculator.default_precision);
        let clamped = calculator
            .default_precision
            .clamp(1, calculator.max_precision);
        if clamped != calculator.default_precision {
            warn!(
                "MCP_DEFAULT_PRECISION {} is outside 1..={}, using {}",
                calculator.default_precision, calculator.max_precision, clamped
            );
            calculator.default_precision = clamped;
        }

        config.transport = TransportConfig::from_env();

        config
    }
}

/// Parse an environment variable, warning and keeping `default` on failure.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid {} value {:?}, using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
