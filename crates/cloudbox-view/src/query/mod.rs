//! File list querying and search history.

pub mod engine;
pub mod history;

pub use engine::{CategoryFilter, ListQuery};
pub use history::SearchHistory;
