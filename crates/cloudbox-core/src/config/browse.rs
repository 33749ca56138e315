//! File listing and search configuration.

use serde::{Deserialize, Serialize};

use crate::types::{FileSortKey, SortDirection};

/// Defaults for the file list and search screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Initial sort column.
    #[serde(default)]
    pub sort_key: FileSortKey,
    /// Initial sort direction.
    #[serde(default)]
    pub sort_direction: SortDirection,
    /// Maximum number of remembered search queries.
    #[serde(default = "default_history_limit")]
    pub search_history_limit: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            sort_key: FileSortKey::default(),
            sort_direction: SortDirection::default(),
            search_history_limit: default_history_limit(),
        }
    }
}

fn default_history_limit() -> usize {
    10
}
