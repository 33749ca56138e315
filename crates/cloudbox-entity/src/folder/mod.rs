//! Folder domain entities.

pub mod model;
pub mod tree;

pub use model::FolderRecord;
pub use tree::{FolderNode, FolderTree};
