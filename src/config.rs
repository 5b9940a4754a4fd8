use std::env;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Service configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the GitHub REST API, without a trailing slash
    pub api_url: String,
    /// Render a message into the container when an upstream request fails,
    /// instead of only logging it
    pub surface_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            api_url: DEFAULT_API_URL.to_string(),
            surface_errors: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue("PORT"))?,
            None => defaults.port,
        };

        let api_url = lookup("GITHUB_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_url);

        let surface_errors = match lookup("HUBCARD_SURFACE_ERRORS").as_deref() {
            None | Some("") => defaults.surface_errors,
            Some("1") | Some("true") => true,
            Some("0") | Some("false") => false,
            Some(_) => return Err(ConfigError::InvalidValue("HUBCARD_SURFACE_ERRORS")),
        };

        Ok(Self {
            host,
            port,
            api_url,
            surface_errors,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
