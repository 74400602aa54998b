//! Host configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SEO_API_URL: &str = "http://127.0.0.1:8002";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got {value:?}")]
    NotHttpUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub connect_secs: u64,
    /// Whole-request limit; `None` leaves slow analyses unbounded.
    pub request_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// SEO backend base URL without a trailing `/`.
    pub upstream: String,
    pub timeouts: UpstreamTimeouts,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SEO_API_URL`: default `http://127.0.0.1:8002`
    /// - `SEO_API_CONNECT_TIMEOUT_SECS`: default 10
    /// - `SEO_API_REQUEST_TIMEOUT_SECS`: unset means no limit
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_var(&get, "PORT")?.unwrap_or(DEFAULT_PORT);
        let upstream = parse_upstream(get("SEO_API_URL"))?;
        let timeouts = UpstreamTimeouts {
            connect_secs: parse_var(&get, "SEO_API_CONNECT_TIMEOUT_SECS")?.unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_secs: parse_var(&get, "SEO_API_REQUEST_TIMEOUT_SECS")?,
        };
        Ok(Self { port, upstream, timeouts })
    }
}

/// Parse an optional variable. Blank counts as unset.
fn parse_var<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = get(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<T>().map(Some).map_err(|_| ConfigError::Invalid { var, value: raw })
}

fn parse_upstream(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return Ok(DEFAULT_SEO_API_URL.to_owned());
    };
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::NotHttpUrl { var: "SEO_API_URL", value: raw });
    }
    Ok(url.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
