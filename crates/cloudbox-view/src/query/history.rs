//! Recent search queries.

use tracing::warn;

use cloudbox_core::AppResult;
use cloudbox_core::config::browse::BrowseConfig;

/// Most-recent-first list of distinct search queries, capped at a limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
    limit: usize,
}

impl SearchHistory {
    /// An empty history keeping at most `limit` entries.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// An empty history with the configured limit.
    pub fn from_config(config: &BrowseConfig) -> Self {
        Self::new(config.search_history_limit)
    }

    /// Restore from a stored JSON array. A corrupt blob yields an empty
    /// history.
    pub fn from_json(blob: &str, limit: usize) -> Self {
        let mut history = Self::new(limit);
        match serde_json::from_str::<Vec<String>>(blob) {
            Ok(stored) => {
                for query in stored.iter().rev() {
                    history.record(query);
                }
            }
            Err(e) => warn!(error = %e, "Discarding unreadable search history"),
        }
        history
    }

    /// Serialize for storage.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Remember a submitted query. Blank queries are ignored.
    pub fn record(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() || self.limit == 0 {
            return false;
        }
        self.entries.retain(|entry| entry != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.limit);
        true
    }

    /// Forget one query. Returns whether it was remembered.
    pub fn remove(&mut self, query: &str) -> bool {
        let query = query.trim();
        let before = self.entries.len();
        self.entries.retain(|entry| entry != query);
        self.entries.len() != before
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::from_config(&BrowseConfig::default())
    }
}
