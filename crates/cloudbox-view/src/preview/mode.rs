//! Preview mode dispatch.

use serde::Serialize;

use cloudbox_entity::file::FileCategory;

/// How a text preview is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFlavor {
    /// Rendered Markdown.
    Markdown,
    /// Monospaced source with line numbers.
    Code,
    /// Plain preformatted text.
    Plain,
}

impl TextFlavor {
    fn detect(is_code: bool, file_name: &str) -> Self {
        let is_markdown = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
            .unwrap_or(false);
        if is_markdown {
            Self::Markdown
        } else if is_code {
            Self::Code
        } else {
            Self::Plain
        }
    }
}

/// Which renderer a file is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "flavor")]
pub enum PreviewMode {
    /// Zoomable image viewer.
    Image,
    /// Video player.
    Video,
    /// Audio player.
    Audio,
    /// Read-only text.
    Text(TextFlavor),
    /// Header plus rows.
    Spreadsheet,
    /// Download-only placeholder.
    Unsupported,
}

impl PreviewMode {
    /// Pick the renderer for a declared category tag.
    ///
    /// The file name only refines the text flavor. Unknown tags map to
    /// [`PreviewMode::Unsupported`].
    pub fn dispatch(declared_category: &str, file_name: &str) -> Self {
        match preview_group(declared_category) {
            Some(FileCategory::Image) => Self::Image,
            Some(FileCategory::Video) => Self::Video,
            Some(FileCategory::Audio) => Self::Audio,
            Some(FileCategory::Document) => Self::Text(TextFlavor::detect(false, file_name)),
            Some(FileCategory::Code) => Self::Text(TextFlavor::detect(true, file_name)),
            Some(FileCategory::Spreadsheet) => Self::Spreadsheet,
            _ => Self::Unsupported,
        }
    }

    /// Whether the host serves this mode from a byte URL.
    pub fn uses_media_url(&self) -> bool {
        matches!(self, Self::Image | Self::Video | Self::Audio)
    }

    /// Whether the host must fetch the text body.
    pub fn needs_text_body(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Spreadsheet)
    }

    /// Short name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Text(TextFlavor::Markdown) => "markdown",
            Self::Text(TextFlavor::Code) => "code",
            Self::Text(TextFlavor::Plain) => "text",
            Self::Spreadsheet => "spreadsheet",
            Self::Unsupported => "unsupported",
        }
    }
}

/// The settings group that gates a declared category tag, or `None` when
/// no renderer exists for it. `text` shares the document switch.
pub fn preview_group(declared_category: &str) -> Option<FileCategory> {
    let tag = declared_category.trim();
    if tag.eq_ignore_ascii_case("text") {
        return Some(FileCategory::Document);
    }
    match FileCategory::from_tag(tag) {
        FileCategory::Presentation | FileCategory::Archive | FileCategory::Other => None,
        group => Some(group),
    }
}
