//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use pasala_core::{AccountId, RosterRequirement};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub domain: DomainConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
    /// Base URL of the public web pages (`/m/{id}`, `/p/{id}`)
    pub public_base_url: String,
    /// Upper bound for a single HTTP request
    pub request_timeout: Duration,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Apply pending migrations at startup
    pub run_migrations: bool,
}

/// Access-token verification configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HS256 secret with the identity provider
    pub secret: String,
    /// Clock skew tolerated when checking `exp`, in seconds
    pub leeway_secs: u64,
}

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Match-domain policies that vary per deployment
#[derive(Debug, Clone, Default)]
pub struct DomainConfig {
    /// Accounts allowed to moderate club claims and remove roster entries leniently
    pub admin_account_ids: Vec<AccountId>,
    /// Roster completeness required by the standard result endpoint
    pub result_roster_requirement: RosterRequirement,
}

impl DomainConfig {
    #[must_use]
    pub fn is_admin(&self, account: AccountId) -> bool {
        self.admin_account_ids.contains(&account)
    }
}

// Default value functions
fn default_app_name() -> String {
    "pasala".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_public_base_url() -> String {
    "https://pasala.app".to_string()
}

fn default_request_timeout_secs() -> u64 {
    5
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_jwt_leeway() -> u64 {
    30
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

/// Parse an optional value, falling back to a default when absent or malformed
fn parsed_or<T: std::str::FromStr>(value: Option<String>, default: impl FnOnce() -> T) -> T {
    value.and_then(|s| s.trim().parse().ok()).unwrap_or_else(default)
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(str::trim) {
        Some("1" | "true" | "TRUE" | "yes") => true,
        Some("0" | "false" | "FALSE" | "no") => false,
        _ => default,
    }
}

fn parse_admin_ids(value: Option<String>) -> Result<Vec<AccountId>, ConfigError> {
    let Some(raw) = value else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            AccountId::parse(s)
                .map_err(|_| ConfigError::InvalidValue("ADMIN_ACCOUNT_IDS", s.to_string()))
        })
        .collect()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if required keys are missing or malformed
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let result_roster_requirement = match get("RESULT_ROSTER_REQUIREMENT") {
            Some(raw) => raw
                .parse::<RosterRequirement>()
                .map_err(|_| ConfigError::InvalidValue("RESULT_ROSTER_REQUIREMENT", raw))?,
            None => RosterRequirement::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: get("APP_NAME").unwrap_or_else(default_app_name),
                env: get("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
                public_base_url: get("PUBLIC_BASE_URL")
                    .map(|s| s.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_public_base_url),
                request_timeout: Duration::from_secs(parsed_or(
                    get("REQUEST_TIMEOUT_SECS"),
                    default_request_timeout_secs,
                )),
            },
            api: ServerConfig {
                host: get("API_HOST").unwrap_or_else(default_host),
                port: get("API_PORT")
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: get("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parsed_or(get("DATABASE_MAX_CONNECTIONS"), default_max_connections),
                min_connections: parsed_or(get("DATABASE_MIN_CONNECTIONS"), default_min_connections),
                run_migrations: parse_bool(get("RUN_MIGRATIONS"), true),
            },
            jwt: JwtConfig {
                secret: get("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?,
                leeway_secs: parsed_or(get("JWT_LEEWAY_SECS"), default_jwt_leeway),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parsed_or(
                    get("RATE_LIMIT_REQUESTS_PER_SECOND"),
                    default_requests_per_second,
                ),
                burst: parsed_or(get("RATE_LIMIT_BURST"), default_burst),
            },
            cors: CorsConfig {
                allowed_origins: get("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            domain: DomainConfig {
                admin_account_ids: parse_admin_ids(get("ADMIN_ACCOUNT_IDS"))?,
                result_roster_requirement,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
