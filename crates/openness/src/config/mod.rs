use crate::assessment::scoring::ThresholdClassifier;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Lowest and highest answer on the Likert grid; thresholds must stay inside it.
const SCALE_FLOOR: f64 = 1.0;
const SCALE_CEILING: f64 = 5.0;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the service and CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let low_threshold = threshold_from_env(
            "OPENNESS_LOW_THRESHOLD",
            ScoringConfig::DEFAULT_LOW_THRESHOLD,
        )?;
        let medium_threshold = threshold_from_env(
            "OPENNESS_MEDIUM_THRESHOLD",
            ScoringConfig::DEFAULT_MEDIUM_THRESHOLD,
        )?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            scoring: ScoringConfig {
                low_threshold,
                medium_threshold,
            },
        })
    }
}

fn threshold_from_env(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => parse_threshold(key, &raw),
        Err(_) => Ok(default),
    }
}

/// Parses a Mode A threshold, bounded to the 1–5 answer scale.
pub fn parse_threshold(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidThreshold {
            key,
            value: raw.to_string(),
        })?;

    check_threshold(key, value)
}

fn check_threshold(key: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !(SCALE_FLOOR..=SCALE_CEILING).contains(&value) {
        return Err(ConfigError::ThresholdOutOfRange { key, value });
    }

    Ok(value)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Mode A band thresholds ("Low if mean <", "Medium if mean ≤").
///
/// Misordered thresholds are accepted; see [`ThresholdClassifier::warning`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub low_threshold: f64,
    pub medium_threshold: f64,
}

impl ScoringConfig {
    pub const DEFAULT_LOW_THRESHOLD: f64 = 2.5;
    pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 3.5;

    /// Applies per-run overrides, e.g. from a request body or CLI flags.
    pub fn with_overrides(
        &self,
        low_threshold: Option<f64>,
        medium_threshold: Option<f64>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            low_threshold: match low_threshold {
                Some(value) => check_threshold("low_threshold", value)?,
                None => self.low_threshold,
            },
            medium_threshold: match medium_threshold {
                Some(value) => check_threshold("medium_threshold", value)?,
                None => self.medium_threshold,
            },
        })
    }

    pub fn classifier(&self) -> ThresholdClassifier {
        ThresholdClassifier::new(self.low_threshold, self.medium_threshold)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            low_threshold: Self::DEFAULT_LOW_THRESHOLD,
            medium_threshold: Self::DEFAULT_MEDIUM_THRESHOLD,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold { key: &'static str, value: String },
    ThresholdOutOfRange { key: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold { key, value } => {
                write!(f, "{key} must be a decimal number (got '{value}')")
            }
            ConfigError::ThresholdOutOfRange { key, value } => write!(
                f,
                "{key} must lie within {SCALE_FLOOR}..={SCALE_CEILING} (got {value})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidThreshold { .. }
            | ConfigError::ThresholdOutOfRange { .. } => None,
        }
    }
}
