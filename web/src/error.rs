use thiserror::Error;

/// Anything that keeps the live slot list from being used.
#[derive(Error, Debug)]
pub enum SlotFetchError {
    #[error("time slot request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("time slot endpoint answered with status {0}")]
    Status(u16),

    #[error("malformed time slot response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("page origin is unavailable")]
    NoOrigin,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
