//! Publisher configuration.

use serde::{Deserialize, Serialize};

use crate::error::{EventError, EventResult};

/// Label used when none is configured.
pub const DEFAULT_LABEL: &str = "publisher";

/// Longest accepted label, in bytes.
pub const MAX_LABEL_LEN: usize = 128;

/// Largest accepted registry pre-allocation.
pub const MAX_INITIAL_CAPACITY: usize = 65_536;

/// Construction-time settings for a [`Publisher`](crate::Publisher).
///
/// ```toml
/// label = "sensor.readings"
/// initial_capacity = 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublisherConfig {
    /// Name attached to this publisher's tracing events.
    pub label: String,
    /// Number of subscriber slots to reserve up front.
    pub initial_capacity: usize,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            initial_capacity: 0,
        }
    }
}

impl PublisherConfig {
    /// Create a config with the given label and default capacity.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the registry pre-allocation.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::ConfigParse`] for malformed TOML or unknown keys,
    /// and [`EventError::InvalidConfig`] if a value fails validation.
    pub fn from_toml_str(text: &str) -> EventResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> EventResult<()> {
        if self.label.trim().is_empty() {
            return Err(EventError::InvalidConfig {
                field: "label",
                reason: "must not be empty".to_string(),
            });
        }
        if self.label.len() > MAX_LABEL_LEN {
            return Err(EventError::InvalidConfig {
                field: "label",
                reason: format!("must be at most {MAX_LABEL_LEN} bytes"),
            });
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(EventError::InvalidConfig {
                field: "initial_capacity",
                reason: format!("must be at most {MAX_INITIAL_CAPACITY}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PublisherConfig::default();
        assert_eq!(config.label, DEFAULT_LABEL);
        assert_eq!(config.initial_capacity, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = PublisherConfig::new("a")
            .with_label("sensor.readings")
            .with_initial_capacity(16);

        assert_eq!(config.label, "sensor.readings");
        assert_eq!(config.initial_capacity, 16);
    }

    #[test]
    fn test_from_toml_full() {
        let config = PublisherConfig::from_toml_str(
            r#"
            label = "window.resized"
            initial_capacity = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.label, "window.resized");
        assert_eq!(config.initial_capacity, 4);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = PublisherConfig::from_toml_str("initial_capacity = 2").unwrap();
        assert_eq!(config.label, DEFAULT_LABEL);
        assert_eq!(config.initial_capacity, 2);

        let empty = PublisherConfig::from_toml_str("").unwrap();
        assert_eq!(empty, PublisherConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_key() {
        let err = PublisherConfig::from_toml_str("priority = 3").unwrap_err();
        assert!(matches!(err, EventError::ConfigParse(_)));
    }

    #[test]
    fn test_from_toml_rejects_bad_type() {
        let err = PublisherConfig::from_toml_str("initial_capacity = \"many\"").unwrap_err();
        assert!(matches!(err, EventError::ConfigParse(_)));
    }

    #[test]
    fn test_validate_empty_label() {
        let err = PublisherConfig::new("   ").validate().unwrap_err();
        assert!(matches!(err, EventError::InvalidConfig { field: "label", .. }));
        assert_eq!(
            err.to_string(),
            "invalid publisher config: label: must not be empty"
        );
    }

    #[test]
    fn test_validate_long_label() {
        let err = PublisherConfig::new("x".repeat(MAX_LABEL_LEN + 1))
            .validate()
            .unwrap_err();
        assert!(matches!(err, EventError::InvalidConfig { field: "label", .. }));
    }

    #[test]
    fn test_validate_capacity() {
        let err = PublisherConfig::default()
            .with_initial_capacity(MAX_INITIAL_CAPACITY + 1)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            EventError::InvalidConfig {
                field: "initial_capacity",
                ..
            }
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = PublisherConfig::new("json").with_initial_capacity(1);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"label\":\"json\""));

        let parsed: PublisherConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
