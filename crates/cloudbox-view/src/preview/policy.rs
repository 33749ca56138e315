//! Which files may be previewed at all.

use serde::Serialize;

use cloudbox_core::config::preview::{EnabledPreviewTypes, PreviewConfig};
use cloudbox_entity::file::FileCategory;

/// Why a file is shown with the download-only placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum UnsupportedReason {
    /// No renderer exists for the file's category.
    UnknownType,
    /// Previews for the category group are switched off.
    Disabled {
        /// The refused category.
        category: FileCategory,
    },
    /// The file exceeds the size limit.
    TooLarge {
        /// File size in bytes.
        size: u64,
        /// Limit in bytes.
        limit: u64,
    },
    /// The host delivered content that does not fit the renderer.
    ContentMismatch,
}

/// Size and category gate applied before any content is requested.
#[derive(Debug, Clone)]
pub struct PreviewPolicy {
    enabled: EnabledPreviewTypes,
    max_bytes: u64,
}

impl PreviewPolicy {
    /// Build from the preview settings.
    pub fn from_config(config: &PreviewConfig) -> Self {
        Self {
            enabled: config.enabled_types.clone(),
            max_bytes: config.max_preview_bytes(),
        }
    }

    /// The size limit in bytes.
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Whether previews for `category` are switched on.
    pub fn group_enabled(&self, category: FileCategory) -> bool {
        let enabled = &self.enabled;
        match category {
            FileCategory::Image => enabled.images,
            FileCategory::Video => enabled.videos,
            FileCategory::Audio => enabled.audios,
            FileCategory::Document => enabled.documents,
            FileCategory::Spreadsheet => enabled.spreadsheets,
            FileCategory::Presentation => enabled.presentations,
            FileCategory::Archive => enabled.archives,
            FileCategory::Code => enabled.code,
            FileCategory::Other => false,
        }
    }

    /// Check a file's category and size. `Ok(())` means it may be previewed.
    pub fn check(&self, category: FileCategory, size: u64) -> Result<(), UnsupportedReason> {
        if category == FileCategory::Other {
            return Err(UnsupportedReason::UnknownType);
        }
        if !self.group_enabled(category) {
            return Err(UnsupportedReason::Disabled { category });
        }
        if size > self.max_bytes {
            return Err(UnsupportedReason::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }
}

impl Default for PreviewPolicy {
    fn default() -> Self {
        Self::from_config(&PreviewConfig::default())
    }
}
