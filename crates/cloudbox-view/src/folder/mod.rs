//! Folder hierarchy: tree building and navigation state.

pub mod navigator;
pub mod tree;

pub use navigator::{FolderNavigator, SelectionLabel, VisibleRow};
pub use tree::{
    breadcrumbs, build_tree, can_move, descendant_ids, flatten_ids, is_valid_move_target,
    move_targets,
};
