//! Client configuration parsed from environment variables.

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API origin without a trailing slash, e.g. `https://api.example.com`.
    pub api_url: String,
    pub timeouts: HttpTimeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_url: DEFAULT_API_URL.to_owned(), timeouts: HttpTimeouts::default() }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `DINEHUB_API_URL`: default `http://127.0.0.1:5000`
    /// - `DINEHUB_REQUEST_TIMEOUT_SECS`: default 30
    /// - `DINEHUB_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a value is empty or a timeout
    /// is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = match std::env::var("DINEHUB_API_URL") {
            Ok(raw) => normalize_api_url(&raw)
                .ok_or(ConfigError::InvalidValue { var: "DINEHUB_API_URL", value: raw })?,
            Err(_) => DEFAULT_API_URL.to_owned(),
        };
        let timeouts = HttpTimeouts {
            request_secs: env_parse_secs("DINEHUB_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse_secs("DINEHUB_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };
        Ok(Self { api_url, timeouts })
    }

    /// Replace the API URL, e.g. from a command-line flag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a blank URL.
    pub fn with_api_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api_url = normalize_api_url(raw)
            .ok_or_else(|| ConfigError::InvalidValue { var: "--api-url", value: raw.to_owned() })?;
        Ok(self)
    }
}

fn normalize_api_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

fn env_parse_secs(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    let Ok(raw) = std::env::var(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidValue { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
