use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to parse {name} as URL: {source}")]
    ParseUrl {
        name: String,
        #[source]
        source: url::ParseError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // News backend
    pub news_api_url: Url,
    pub http_timeout: Duration,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // News backend
            news_api_url: parse_env_url("NEWS_API_URL", "http://127.0.0.1:8000")?,
            http_timeout: Duration::from_secs(parse_env_u64("HTTP_TIMEOUT_SECS", 30)?),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 3000)?,
            static_dir: optional_env("STATIC_DIR").map(PathBuf::from),
        })
    }

    /// Configuration for tests, independent of the process environment.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            news_api_url: Url::parse("http://127.0.0.1:8000").expect("static URL parses"),
            http_timeout: Duration::from_secs(5),
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
            static_dir: None,
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.news_api_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                name: "NEWS_API_URL".to_string(),
                message: format!("scheme must be http or https, got '{}'", self.news_api_url.scheme()),
            });
        }
        if self.news_api_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                name: "NEWS_API_URL".to_string(),
                message: "must be an absolute base URL".to_string(),
            });
        }
        if self.http_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "HTTP_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.web_host.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "WEB_HOST".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_url(name: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = env_or_default(name, default);
    Url::parse(&raw).map_err(|e| ConfigError::ParseUrl {
        name: name.to_string(),
        source: e,
    })
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
