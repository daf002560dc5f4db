//! Configuration for temporal analysis

use serde::{Deserialize, Serialize};

/// Configuration for the TemporalExtractor and DriftAnalyzer
///
/// Every constant that shapes analysis output lives here so it can be tuned
/// without code changes.
///
/// # Examples
///
/// ```
/// use ontext_temporal::TemporalConfig;
///
/// let config = TemporalConfig::default();
/// assert_eq!(config.year_window, 2);
///
/// // Only documents from the exact year
/// let config = TemporalConfig::strict();
/// assert_eq!(config.year_window, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalConfig {
    /// Documents within +/- this many years of a period belong to it
    /// Default: 2
    pub year_window: u32,

    /// Maximum number of usage contexts per period
    /// Default: 10
    pub max_contexts: usize,

    /// Words kept on each side of a term occurrence in a context window
    /// Default: 3
    pub context_word_radius: usize,

    /// Number of co-occurring terms returned as the semantic field
    /// Default: 20
    pub semantic_field_size: usize,

    /// Number of top semantic-field terms compared for drift
    /// Default: 10
    pub drift_field_size: usize,

    /// Minimum token length kept in semantic fields and context keywords
    /// Default: 4 (tokens of three letters or fewer are dropped)
    pub min_token_length: usize,

    /// Definition candidates are truncated to this many characters
    /// Default: 500
    pub definition_max_chars: usize,

    /// Candidates sharing this many leading characters (case-folded) are duplicates
    /// Default: 100
    pub definition_dedup_prefix: usize,

    /// Characters of content scanned for a year when metadata has none
    /// Default: 1000
    pub content_year_scan_chars: usize,

    /// Highest frequency still labelled "emerging"
    /// Default: 9
    pub emerging_max_frequency: usize,

    /// Highest frequency still labelled "developing"
    /// Default: 49
    pub developing_max_frequency: usize,

    /// Distinct definitions needed for an established term to count as "evolving"
    /// Default: 4 (more than three)
    pub evolving_min_definitions: usize,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            year_window: 2,
            max_contexts: 10,
            context_word_radius: 3,
            semantic_field_size: 20,
            drift_field_size: 10,
            min_token_length: 4,
            definition_max_chars: 500,
            definition_dedup_prefix: 100,
            content_year_scan_chars: 1000,
            emerging_max_frequency: 9,
            developing_max_frequency: 49,
            evolving_min_definitions: 4,
        }
    }
}

impl TemporalConfig {
    /// Exact-year matching: a document belongs only to its own year
    pub fn strict() -> Self {
        Self {
            year_window: 0,
            ..Self::default()
        }
    }

    /// Wide windows for sparse corpora
    pub fn broad() -> Self {
        Self {
            year_window: 5,
            max_contexts: 20,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_contexts == 0 {
            return Err("max_contexts must be greater than 0".to_string());
        }
        if self.semantic_field_size == 0 {
            return Err("semantic_field_size must be greater than 0".to_string());
        }
        if self.drift_field_size == 0 {
            return Err("drift_field_size must be greater than 0".to_string());
        }
        if self.drift_field_size > self.semantic_field_size {
            return Err("drift_field_size cannot exceed semantic_field_size".to_string());
        }
        if self.definition_max_chars == 0 {
            return Err("definition_max_chars must be greater than 0".to_string());
        }
        if self.definition_dedup_prefix == 0 {
            return Err("definition_dedup_prefix must be greater than 0".to_string());
        }
        if self.emerging_max_frequency >= self.developing_max_frequency {
            return Err("emerging_max_frequency must be below developing_max_frequency".to_string());
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
