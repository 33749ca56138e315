//! File record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cloudbox_core::types::{FileId, FolderId};

use super::category::FileCategory;

/// A file as returned by the "list files" and "search files" calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Unique file identifier.
    pub id: FileId,
    /// The file name (including extension).
    pub name: String,
    /// File size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Category tag declared by the server.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<String>,
    /// MIME type of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// The folder containing this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<FolderId>,
    /// When the file was uploaded.
    #[serde(default, alias = "uploadedAt")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the file was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FileRecord {
    /// Create a record with only a name and size.
    pub fn new(id: impl Into<FileId>, name: impl Into<String>, size: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size,
            declared_type: None,
            mime_type: None,
            folder_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }

    /// Category derived from the name, falling back to the MIME type.
    pub fn category(&self) -> FileCategory {
        match FileCategory::from_file_name(&self.name) {
            FileCategory::Other => self
                .mime_type
                .as_deref()
                .map(FileCategory::from_mime)
                .unwrap_or(FileCategory::Other),
            category => category,
        }
    }
}
