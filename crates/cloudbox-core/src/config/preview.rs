//! File preview configuration.

use serde::{Deserialize, Serialize};

/// Preview dialog behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Start videos playing as soon as they are opened.
    #[serde(default)]
    pub auto_play_videos: bool,
    /// Allow wheel and toolbar zoom in the image viewer.
    #[serde(default = "default_true")]
    pub enable_zoom: bool,
    /// Allow rotating images in the image viewer.
    #[serde(default = "default_true")]
    pub enable_rotation: bool,
    /// Show size and modification time in the preview header.
    #[serde(default = "default_true")]
    pub show_metadata: bool,
    /// Files larger than this (in megabytes) are not previewed.
    #[serde(default = "default_max_preview_size")]
    pub max_preview_size_mb: u64,
    /// Which category groups may be previewed at all.
    #[serde(default)]
    pub enabled_types: EnabledPreviewTypes,
}

/// Per-group preview switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnabledPreviewTypes {
    /// Raster and vector images.
    #[serde(default = "default_true")]
    pub images: bool,
    /// Video containers.
    #[serde(default = "default_true")]
    pub videos: bool,
    /// Audio files.
    #[serde(default = "default_true")]
    pub audios: bool,
    /// Text-like documents (plain text, Markdown, PDF, word processor files).
    #[serde(default = "default_true")]
    pub documents: bool,
    /// Spreadsheets and delimited text.
    #[serde(default = "default_true")]
    pub spreadsheets: bool,
    /// Slide decks.
    #[serde(default = "default_true")]
    pub presentations: bool,
    /// Compressed archives.
    #[serde(default)]
    pub archives: bool,
    /// Source code and structured text.
    #[serde(default = "default_true")]
    pub code: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            auto_play_videos: false,
            enable_zoom: true,
            enable_rotation: true,
            show_metadata: true,
            max_preview_size_mb: default_max_preview_size(),
            enabled_types: EnabledPreviewTypes::default(),
        }
    }
}

impl Default for EnabledPreviewTypes {
    fn default() -> Self {
        Self {
            images: true,
            videos: true,
            audios: true,
            documents: true,
            spreadsheets: true,
            presentations: true,
            archives: false,
            code: true,
        }
    }
}

impl PreviewConfig {
    /// Maximum previewable size in bytes.
    pub fn max_preview_bytes(&self) -> u64 {
        self.max_preview_size_mb.saturating_mul(1024 * 1024)
    }
}

fn default_true() -> bool {
    true
}

fn default_max_preview_size() -> u64 {
    50
}
