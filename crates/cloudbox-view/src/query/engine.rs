//! Client-side filter and sort over a fetched file list.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use cloudbox_core::config::browse::BrowseConfig;
use cloudbox_core::types::{FileSortKey, NameFilter, SortDirection};
use cloudbox_entity::file::{FileCategory, FileRecord};

/// Category filter of a file list. `All` disables the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Keep every category.
    #[default]
    All,
    /// Keep only files of this category.
    #[serde(untagged)]
    Only(FileCategory),
}

impl CategoryFilter {
    /// Whether a file of `category` passes.
    pub fn matches(&self, category: FileCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Query, category filter, and sort of a file list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring on the file name.
    pub query: NameFilter,
    /// Derived-category filter.
    pub category: CategoryFilter,
    /// Sort column.
    pub sort_key: FileSortKey,
    /// Sort direction.
    pub direction: SortDirection,
}

impl ListQuery {
    /// An unfiltered query sorted by name ascending.
    pub fn new() -> Self {
        Self::default()
    }

    /// An unfiltered query using the configured default sort.
    pub fn from_config(config: &BrowseConfig) -> Self {
        Self {
            sort_key: config.sort_key,
            direction: config.sort_direction,
            ..Self::default()
        }
    }

    /// Set the name query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = NameFilter::new(query);
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the sort.
    pub fn sorted_by(mut self, key: FileSortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.direction = direction;
        self
    }

    /// Column-header click: the same key flips the direction, a new key
    /// sorts ascending.
    pub fn toggle_sort(&mut self, key: FileSortKey) {
        if self.sort_key == key {
            self.direction = self.direction.flipped();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Asc;
        }
    }

    /// Whether `file` passes both filters.
    pub fn accepts(&self, file: &FileRecord) -> bool {
        self.query.matches(&file.name) && self.category.matches(file.category())
    }

    /// Compare two files on the sort key, oriented by the direction.
    pub fn compare(&self, a: &FileRecord, b: &FileRecord) -> Ordering {
        let ordering = match self.sort_key {
            FileSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            FileSortKey::Size => a.size.cmp(&b.size),
            FileSortKey::Category => a.category().as_str().cmp(b.category().as_str()),
            FileSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            FileSortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        };
        self.direction.apply(ordering)
    }

    /// Filter then sort. Ties keep their input order.
    pub fn apply<'a>(&self, files: &'a [FileRecord]) -> Vec<&'a FileRecord> {
        let mut kept: Vec<&FileRecord> = files.iter().filter(|file| self.accepts(file)).collect();
        kept.sort_by(|a, b| self.compare(a, b));
        kept
    }
}
