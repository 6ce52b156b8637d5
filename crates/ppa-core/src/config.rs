//! Session configuration

use crate::error::ConfigError;
use crate::ladder::DEFAULT_LADDER_DEPTH;
use crate::matrix::MatrixPolicy;
use crate::metrics::DEFAULT_HIGH_STRESS_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Tunables for one analysis session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Stress above this marks a project high-stress
    pub high_stress_threshold: f64,
    /// Number of projects offered for laddering
    pub ladder_depth: usize,
    /// Impact matrix behaviour when the project list changes
    pub matrix_policy: MatrixPolicy,
}

impl SessionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With high-stress threshold
    #[inline]
    #[must_use]
    pub fn with_high_stress_threshold(mut self, threshold: f64) -> Self {
        self.high_stress_threshold = threshold;
        self
    }

    /// With ladder depth
    #[inline]
    #[must_use]
    pub fn with_ladder_depth(mut self, depth: usize) -> Self {
        self.ladder_depth = depth;
        self
    }

    /// With matrix policy
    #[inline]
    #[must_use]
    pub fn with_matrix_policy(mut self, policy: MatrixPolicy) -> Self {
        self.matrix_policy = policy;
        self
    }

    /// Parse a standalone `[session]`-shaped TOML document
    ///
    /// # Errors
    /// Returns error if the TOML is invalid or fails [`validate`](Self::validate)
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for a threshold outside
    /// 0..=10 or a zero ladder depth
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=10.0).contains(&self.high_stress_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "high_stress_threshold",
                reason: format!("{} is outside 0..=10", self.high_stress_threshold),
            });
        }
        if self.ladder_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ladder_depth",
                reason: "must offer at least one project".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            high_stress_threshold: DEFAULT_HIGH_STRESS_THRESHOLD,
            ladder_depth: DEFAULT_LADDER_DEPTH,
            matrix_policy: MatrixPolicy::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::new();
        assert_eq!(config.high_stress_threshold, 6.0);
        assert_eq!(config.ladder_depth, 3);
        assert_eq!(config.matrix_policy, MatrixPolicy::Reset);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SessionConfig::from_toml("matrix_policy = \"preserve\"").unwrap();
        assert_eq!(config.matrix_policy, MatrixPolicy::Preserve);
        assert_eq!(config.ladder_depth, 3);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SessionConfig::from_toml("ladder_depth = 0"),
            Err(ConfigError::InvalidValue { field: "ladder_depth", .. })
        ));
        assert!(SessionConfig::from_toml("high_stress_threshold = 12.5").is_err());
        assert!(matches!(
            SessionConfig::from_toml("ladderdepth = 2"),
            Err(ConfigError::InvalidToml(_))
        ));
    }

    #[test]
    fn builder() {
        let config = SessionConfig::new()
            .with_ladder_depth(5)
            .with_high_stress_threshold(7.5)
            .with_matrix_policy(MatrixPolicy::Preserve);
        assert_eq!(config.ladder_depth, 5);
        assert_eq!(config.high_stress_threshold, 7.5);
        assert!(config.validate().is_ok());
    }
}
