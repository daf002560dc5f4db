//! Corpus documents handed to the analysis core

use crate::Year;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A metadata value attached to a document
///
/// Document stores hand over loosely typed metadata; a year may arrive as a
/// number (`2010`) or as text (`"2010-05-01"`). Anything else (`null`,
/// booleans, arrays, objects) is kept as [`MetadataValue::Other`] so one odd
/// entry never rejects the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Integer value
    Integer(i64),
    /// Floating point value, e.g. `2010.0`
    Float(f64),
    /// Free text value
    Text(String),
    /// Any other JSON value
    Other(serde_json::Value),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Integer(n) => write!(f, "{}", n),
            MetadataValue::Float(n) => write!(f, "{}", n),
            MetadataValue::Text(s) => write!(f, "{}", s),
            MetadataValue::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Integer(value)
    }
}

impl From<i32> for MetadataValue {
    fn from(value: i32) -> Self {
        MetadataValue::Integer(i64::from(value))
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

/// A single document of the analysed corpus
///
/// Immutable for the duration of an analysis call. The core reads `text`,
/// `year` and `metadata` and never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusDocument {
    /// Full text content
    pub text: String,

    /// Best-effort publication year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Year>,

    /// Display name (title or filename)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Additional metadata, consulted when `year` is absent
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl CorpusDocument {
    /// Create a document with text only
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            year: None,
            name: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Set the explicit year
    pub fn with_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a metadata entry
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Name shown in results when reporting where something was found
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled document")
    }
}
