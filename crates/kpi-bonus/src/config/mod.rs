use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Remote calculation endpoints tried before falling back to the local engine.
pub const DEFAULT_REMOTE_BASES: &str = "http://localhost:8080,http://localhost:8081";
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 3_000;

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

/// Top-level configuration for the calculator service and CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub remote: RemoteConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = match env::var("APP_LOG_FORMAT") {
            Ok(value) => LogFormat::parse(&value)?,
            Err(_) => LogFormat::Compact,
        };

        let base_urls = RemoteConfig::parse_bases(
            &env::var("KPI_REMOTE_BASES").unwrap_or_else(|_| DEFAULT_REMOTE_BASES.to_string()),
        );
        let timeout_ms = match env::var("KPI_REMOTE_TIMEOUT_MS") {
            Ok(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::InvalidRemoteTimeout { value })?,
            Err(_) => DEFAULT_REMOTE_TIMEOUT_MS,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                log_format,
            },
            remote: RemoteConfig {
                base_urls,
                timeout: Duration::from_millis(timeout_ms),
            },
        })
    }
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

/// Output shape of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat {
                value: value.to_string(),
            }),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Candidate calculator services, in the order they are tried.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_urls: Vec<String>,
    pub timeout: Duration,
}

impl RemoteConfig {
    /// Splits a comma list into trimmed base URLs, dropping blanks, trailing
    /// slashes and repeats while keeping first-seen order.
    pub fn parse_bases(raw: &str) -> Vec<String> {
        let mut bases: Vec<String> = Vec::new();
        for candidate in raw.split(',') {
            let candidate = candidate.trim().trim_end_matches('/');
            if candidate.is_empty() || bases.iter().any(|known| known == candidate) {
                continue;
            }
            bases.push(candidate.to_string());
        }
        bases
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_urls: Self::parse_bases(DEFAULT_REMOTE_BASES),
            timeout: Duration::from_millis(DEFAULT_REMOTE_TIMEOUT_MS),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidRemoteTimeout { value: String },
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidRemoteTimeout { value } => write!(
                f,
                "KPI_REMOTE_TIMEOUT_MS must be a positive number of milliseconds, got '{}'",
                value
            ),
            ConfigError::InvalidLogFormat { value } => write!(
                f,
                "APP_LOG_FORMAT must be 'compact' or 'json', got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidRemoteTimeout { .. }
            | ConfigError::InvalidLogFormat { .. } => None,
        }
    }
}
