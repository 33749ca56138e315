//! Folder record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cloudbox_core::types::FolderId;

/// A folder as returned by the "list folders" call.
///
/// Records arrive as a flat list; the hierarchy is expressed only through
/// `parent_id`. Nothing guarantees that list is acyclic or that every
/// referenced parent is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRecord {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (null for top-level folders).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    /// When the folder was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the folder was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FolderRecord {
    /// Create a record with no timestamps.
    pub fn new(
        id: impl Into<FolderId>,
        name: impl Into<String>,
        parent_id: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.map(FolderId::from),
            created_at: None,
            updated_at: None,
        }
    }

    /// Check if this is a top-level folder (no parent reference).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
