use thiserror::Error;

/// Rejected user input. Always answered with a corrective reply, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("threshold is not a number")]
    InvalidFormat,
    #[error("threshold must be positive")]
    NonPositive,
    #[error("token symbol must contain letters only")]
    InvalidSymbol,
    #[error("token {0} is not supported")]
    UnsupportedToken(String),
    #[error("wallet address is empty")]
    EmptyInput,
    #[error("wallet address is not valid base58")]
    InvalidAddress,
}

/// Transient failure talking to the analytics API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("analytics API answered with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}
