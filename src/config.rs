//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MEMBERS_FILE: &str = "data/members.yaml";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("invalid MEMBERS_UPSTREAM_URL: {0:?} (expected http:// or https://)")]
    InvalidUpstreamUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Where `/api/member` reads its roster from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterConfig {
    File { path: PathBuf },
    Upstream { url: String, timeouts: UpstreamTimeouts },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub roster: RosterConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MEMBERS_FILE`: default `data/members.yaml`
    /// - `MEMBERS_UPSTREAM_URL`: proxy this URL instead of reading a file
    /// - `MEMBERS_UPSTREAM_TIMEOUT_SECS`: default 10
    /// - `MEMBERS_UPSTREAM_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a numeric value or the upstream URL is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let upstream = lookup("MEMBERS_UPSTREAM_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());
        let roster = match upstream {
            Some(url) => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidUpstreamUrl(url));
                }
                let timeouts = UpstreamTimeouts {
                    request_secs: parse_or(
                        "MEMBERS_UPSTREAM_TIMEOUT_SECS",
                        lookup("MEMBERS_UPSTREAM_TIMEOUT_SECS"),
                        DEFAULT_UPSTREAM_TIMEOUT_SECS,
                    )?,
                    connect_secs: parse_or(
                        "MEMBERS_UPSTREAM_CONNECT_TIMEOUT_SECS",
                        lookup("MEMBERS_UPSTREAM_CONNECT_TIMEOUT_SECS"),
                        DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
                    )?,
                };
                RosterConfig::Upstream { url, timeouts }
            }
            None => {
                let path = lookup("MEMBERS_FILE").unwrap_or_else(|| DEFAULT_MEMBERS_FILE.to_owned());
                RosterConfig::File { path: PathBuf::from(path) }
            }
        };

        Ok(Self { port, roster })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
