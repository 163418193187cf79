//! Environment-driven configuration.
//!
//! Every setting has a default suited to local development; production
//! refuses to start without an explicit database URL and at least one API
//! token.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::storage::connection::DEFAULT_DATABASE_URL;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5173", "http://127.0.0.1:5173"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown APP_ENV '{0}', expected development, testing or production")]
    UnknownEnvironment(String),
    #[error("Invalid BIND_ADDR '{0}'")]
    InvalidBindAddr(String),
    #[error("Invalid API_TOKENS entry '{0}', expected <user_id>:<token>")]
    InvalidApiToken(String),
    #[error("{0} must be set in production")]
    MissingVariable(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Testing => "testing",
            Environment::Production => "production",
        };
        write!(f, "{}", name)
    }
}

/// Origins allowed to make cross-origin requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub cors_origins: CorsOrigins,
    /// `(user_id, token)` pairs seeded into the token store at startup
    pub api_tokens: Vec<(i64, String)>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let environment = match var("APP_ENV") {
            Some(value) => value.parse()?,
            None => Environment::Development,
        };

        let bind_addr_raw = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr_raw.clone()))?;

        let database_url = match (var("DATABASE_URL"), environment) {
            (Some(url), _) => url,
            (None, Environment::Production) => return Err(ConfigError::MissingVariable("DATABASE_URL")),
            (None, Environment::Testing) => "sqlite::memory:".to_string(),
            (None, Environment::Development) => DEFAULT_DATABASE_URL.to_string(),
        };

        let cors_origins = match var("CORS_ORIGINS") {
            Some(value) => parse_cors_origins(&value),
            None if environment == Environment::Development => CorsOrigins::Any,
            None => CorsOrigins::List(DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()),
        };

        let api_tokens = match var("API_TOKENS") {
            Some(value) => parse_api_tokens(&value)?,
            None => Vec::new(),
        };
        if environment == Environment::Production && api_tokens.is_empty() {
            return Err(ConfigError::MissingVariable("API_TOKENS"));
        }

        let log_filter = var("RUST_LOG").unwrap_or_else(|| match environment {
            Environment::Development => "debug".to_string(),
            _ => "info".to_string(),
        });

        Ok(Self {
            environment,
            bind_addr,
            database_url,
            cors_origins,
            api_tokens,
            log_filter,
        })
    }
}

fn parse_cors_origins(value: &str) -> CorsOrigins {
    if value == "*" {
        return CorsOrigins::Any;
    }
    CorsOrigins::List(
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

fn parse_api_tokens(value: &str) -> Result<Vec<(i64, String)>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (user_id, token) = entry
                .split_once(':')
                .ok_or_else(|| ConfigError::InvalidApiToken(entry.to_string()))?;
            let user_id = user_id
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidApiToken(entry.to_string()))?;
            let token = token.trim();
            if token.is_empty() {
                return Err(ConfigError::InvalidApiToken(entry.to_string()));
            }
            Ok((user_id, token.to_string()))
        })
        .collect()
}
