//! Validation thresholds

use serde::{Deserialize, Serialize};

/// Thresholds the engine reads instead of hard-coding
///
/// Deserializable so a host application can load it from its own config;
/// missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum password length for the checklist's length row
    pub password_min_length: usize,
    /// Exact number of digits a zipcode must have
    pub zipcode_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            password_min_length: 8,
            zipcode_length: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.password_min_length, 8);
        assert_eq!(config.zipcode_length, 5);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: ValidationConfig =
            serde_json::from_str(r#"{"password_min_length": 12}"#).unwrap();
        assert_eq!(config.password_min_length, 12);
        assert_eq!(config.zipcode_length, 5);
    }
}
