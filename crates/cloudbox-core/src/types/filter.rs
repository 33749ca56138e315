//! Case-insensitive name matching shared by folder and file filters.

use serde::{Deserialize, Serialize};

/// A case-insensitive substring filter on display names.
///
/// An empty needle matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NameFilter {
    raw: String,
    needle: String,
}

impl NameFilter {
    /// Create a filter from user input.
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// Whether the filter accepts every name.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Return the query as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Check whether `name` contains the query, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || name.to_lowercase().contains(&self.needle)
    }
}

impl From<String> for NameFilter {
    fn from(query: String) -> Self {
        Self::new(query)
    }
}

impl From<&str> for NameFilter {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

impl From<NameFilter> for String {
    fn from(filter: NameFilter) -> Self {
        filter.raw
    }
}
