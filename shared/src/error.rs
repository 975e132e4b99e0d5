use thiserror::Error;

/// Failures reading the interval list the widget is seeded with
#[derive(Debug, Error)]
pub enum SlotSourceError {
    #[error("slot source is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("slot source must be a JSON array of intervals")]
    NotAnArray,
}

/// Failures reading a widget configuration override
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid widget config: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("session length must be at least one minute")]
    ZeroSessionLength,
}
