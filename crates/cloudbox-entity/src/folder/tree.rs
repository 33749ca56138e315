//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use cloudbox_core::types::FolderId;

use super::model::FolderRecord;

/// A node in a folder tree.
///
/// Nodes are built fresh on every rebuild and owned by exactly one tree;
/// consumers never patch them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Parent reference exactly as it appeared on the record.
    pub parent_id: Option<FolderId>,
    /// Child folder nodes, in input order.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Create a childless node from a record.
    pub fn leaf(record: &FolderRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            parent_id: record.parent_id.clone(),
            children: Vec::new(),
        }
    }

    /// Whether this node has any child folders.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Find a node by ID in this subtree.
    pub fn find(&self, id: &str) -> Option<&FolderNode> {
        self.iter().find(|node| node.id.as_str() == id)
    }

    /// Iterate this subtree in pre-order (self first).
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

impl Drop for FolderNode {
    // Unlinks descendants onto a heap stack so a deep chain does not
    // recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Pre-order iterator over one or more subtrees.
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a FolderNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a FolderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A complete folder forest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderTree {
    /// The top-level node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: u64,
}

impl FolderTree {
    /// Wrap a list of roots, counting every node.
    pub fn from_roots(roots: Vec<FolderNode>) -> Self {
        let total_folders = roots.iter().map(|root| root.iter().count() as u64).sum();
        Self {
            roots,
            total_folders,
        }
    }

    /// Iterate every node in pre-order, root by root.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// Find a node by ID anywhere in the tree.
    pub fn find(&self, id: &str) -> Option<&FolderNode> {
        self.iter().find(|node| node.id.as_str() == id)
    }
}
