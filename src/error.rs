use thiserror::Error;

pub type Result<T> = anyhow::Result<T>;

/// Failure of a single upstream request. The widget does not tell the two
/// apart; they exist so the log says which one happened.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {0} failed: {1}")]
    Network(String, #[source] reqwest::Error),
    #[error("Could not decode response from {0}: {1}")]
    Decode(String, #[source] serde_json::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
