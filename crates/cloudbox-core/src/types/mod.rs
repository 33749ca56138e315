//! Core type definitions used across the Cloudbox workspace.

pub mod filter;
pub mod id;
pub mod sorting;

pub use filter::NameFilter;
pub use id::*;
pub use sorting::{FileSortKey, SortDirection};
