//! Event publisher error types.

use thiserror::Error;

/// Errors raised while configuring a publisher.
///
/// Subscribing and firing never fail; only configuration can.
#[derive(Debug, Error)]
pub enum EventError {
    /// The configuration text could not be parsed.
    #[error("failed to parse publisher config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("invalid publisher config: {field}: {reason}")]
    InvalidConfig {
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result type for publisher configuration.
pub type EventResult<T> = Result<T, EventError>;
