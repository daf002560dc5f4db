//! Period matcher configuration

use serde::{Deserialize, Serialize};

/// Configuration for the PeriodMatcher
///
/// # Examples
///
/// ```
/// use ontext_periods::MatcherConfig;
///
/// let config = MatcherConfig::default();
/// assert_eq!(config.nearest_tolerance_years, 50);
///
/// // Direct matches only
/// let config = MatcherConfig::strict();
/// assert_eq!(config.nearest_tolerance_years, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Furthest a nearest-year fallback may be from the record's reference point
    /// Default: 50 years
    pub nearest_tolerance_years: u32,

    /// Excerpts built from definition text are cut at this many characters
    /// Default: 200
    pub excerpt_max_chars: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            nearest_tolerance_years: 50,
            excerpt_max_chars: 200,
        }
    }
}

impl MatcherConfig {
    /// No nearest-year fallback beyond an exact hit on the reference point
    pub fn strict() -> Self {
        Self {
            nearest_tolerance_years: 0,
            ..Self::default()
        }
    }

    /// Generous fallback for sparse timelines
    pub fn lenient() -> Self {
        Self {
            nearest_tolerance_years: 100,
            excerpt_max_chars: 400,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.excerpt_max_chars == 0 {
            return Err("excerpt_max_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
