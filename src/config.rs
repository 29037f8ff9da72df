//! Client configuration parsed from environment variables.

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The base URL is not an absolute http(s) URL.
    #[error("invalid base URL '{0}' (expected http:// or https://)")]
    InvalidBaseUrl(String),

    /// A numeric setting could not be parsed.
    #[error("invalid value for {var}: '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

/// Optional HTTP timeouts. `None` leaves the transport default (no timeout).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTimeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeBoardConfig {
    pub base_url: String,
    pub timeouts: RequestTimeouts,
}

impl Default for NoticeBoardConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeouts: RequestTimeouts::default() }
    }
}

impl NoticeBoardConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `NOTICE_API_BASE_URL`: default `http://127.0.0.1:5000/api`
    /// - `NOTICE_REQUEST_TIMEOUT_SECS`: unset means no request timeout
    /// - `NOTICE_CONNECT_TIMEOUT_SECS`: unset means no connect timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or a timeout is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("NOTICE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let timeouts = RequestTimeouts {
            request_secs: env_parse_u64("NOTICE_REQUEST_TIMEOUT_SECS")?,
            connect_secs: env_parse_u64("NOTICE_CONNECT_TIMEOUT_SECS")?,
        };
        Self::new(&base_url, timeouts)
    }

    /// Build config from explicit values, normalizing the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s).
    pub fn new(base_url: &str, timeouts: RequestTimeouts) -> Result<Self, ConfigError> {
        Ok(Self { base_url: normalize_base_url(base_url)?, timeouts })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn env_parse_u64(var: &'static str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(var) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
