//! Validity thresholds shared by all indices.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::IndexError;

/// Below this validity a result should carry a warning.
pub const DEFAULT_VALIDITY_WARNING: f64 = 0.7;
/// Below this validity a result should not be trusted at all.
pub const DEFAULT_VALIDITY_LIMIT: f64 = 0.4;

/// How far a result's validity can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidityLevel {
    /// `validity >= validity_warning`
    Sufficient,
    /// `validity_limit <= validity < validity_warning`
    Warning,
    /// `validity < validity_limit`
    Insufficient,
}

/// Validity thresholds, owned by whoever evaluates results.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub validity_warning: f64,
    pub validity_limit: f64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            validity_warning: DEFAULT_VALIDITY_WARNING,
            validity_limit: DEFAULT_VALIDITY_LIMIT,
        }
    }
}

impl IndexConfig {
    /// Parse from JSON. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        let config: Self = serde_json::from_str(json).map_err(IndexError::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Require `0 <= limit <= warning <= 1`.
    pub fn validate(&self) -> Result<(), IndexError> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if in_unit(self.validity_warning)
            && in_unit(self.validity_limit)
            && self.validity_limit <= self.validity_warning
        {
            Ok(())
        } else {
            Err(IndexError::InvalidThresholds {
                warning: self.validity_warning,
                limit: self.validity_limit,
            })
        }
    }

    pub fn validity_level(&self, validity: f64) -> ValidityLevel {
        if validity >= self.validity_warning {
            ValidityLevel::Sufficient
        } else if validity >= self.validity_limit {
            ValidityLevel::Warning
        } else {
            ValidityLevel::Insufficient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = IndexConfig::default();
        assert_eq!(config.validity_warning, 0.7);
        assert_eq!(config.validity_limit, 0.4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validity_levels() {
        let config = IndexConfig::default();
        assert_eq!(config.validity_level(1.0), ValidityLevel::Sufficient);
        assert_eq!(config.validity_level(0.7), ValidityLevel::Sufficient);
        assert_eq!(config.validity_level(0.69), ValidityLevel::Warning);
        assert_eq!(config.validity_level(0.4), ValidityLevel::Warning);
        assert_eq!(config.validity_level(0.39), ValidityLevel::Insufficient);
        assert_eq!(config.validity_level(0.0), ValidityLevel::Insufficient);
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = IndexConfig::from_json(r#"{"validity_warning": 0.8}"#).unwrap();
        assert_eq!(config.validity_warning, 0.8);
        assert_eq!(config.validity_limit, DEFAULT_VALIDITY_LIMIT);
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(IndexConfig::from_json("{}").unwrap(), IndexConfig::default());
    }

    #[test]
    fn test_from_json_rejects_inverted_thresholds() {
        let err = IndexConfig::from_json(r#"{"validity_warning": 0.3, "validity_limit": 0.5}"#)
            .unwrap_err();
        assert!(matches!(err, IndexError::InvalidThresholds { .. }));
    }

    #[test]
    fn test_from_json_rejects_out_of_range() {
        let err = IndexConfig::from_json(r#"{"validity_warning": 1.5}"#).unwrap_err();
        assert!(matches!(err, IndexError::InvalidThresholds { .. }));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = IndexConfig::from_json("{validity").unwrap_err();
        assert!(matches!(err, IndexError::Config(_)));
    }
}
