//! Coarse file-type categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A coarse file-type tag used for list filtering and preview dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Raster and vector images.
    Image,
    /// Text-like documents.
    Document,
    /// Spreadsheets and delimited text.
    Spreadsheet,
    /// Slide decks.
    Presentation,
    /// Video containers.
    Video,
    /// Audio files.
    Audio,
    /// Compressed archives.
    Archive,
    /// Source code and structured configuration.
    Code,
    /// Anything not recognized.
    Other,
}

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico", "tiff",
];
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt", "rtf", "md", "markdown"];
const SPREADSHEET_EXTENSIONS: &[&str] = &["xls", "xlsx", "csv"];
const PRESENTATION_EXTENSIONS: &[&str] = &["ppt", "pptx"];
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "avi", "mov", "wmv", "flv", "webm", "mkv", "m4v", "3gp",
];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "aac", "ogg", "wma", "m4a"];
const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "rar", "7z", "tar", "gz", "bz2"];
const CODE_EXTENSIONS: &[&str] = &[
    "js", "ts", "jsx", "tsx", "html", "css", "scss", "sass", "less", "json", "xml", "py", "java",
    "cpp", "c", "h", "php", "rb", "go", "rs", "swift", "kt", "dart", "vue", "svelte", "sql", "sh",
    "bat", "yml", "yaml", "toml", "ini", "cfg", "conf",
];

impl FileCategory {
    /// Every category, in display order.
    pub const ALL: [FileCategory; 9] = [
        Self::Image,
        Self::Document,
        Self::Spreadsheet,
        Self::Presentation,
        Self::Video,
        Self::Audio,
        Self::Archive,
        Self::Code,
        Self::Other,
    ];

    /// Classify a lowercase or mixed-case extension (without the dot).
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_ascii_lowercase();
        let ext = ext.as_str();
        let table: [(&[&str], FileCategory); 8] = [
            (IMAGE_EXTENSIONS, Self::Image),
            (DOCUMENT_EXTENSIONS, Self::Document),
            (SPREADSHEET_EXTENSIONS, Self::Spreadsheet),
            (PRESENTATION_EXTENSIONS, Self::Presentation),
            (VIDEO_EXTENSIONS, Self::Video),
            (AUDIO_EXTENSIONS, Self::Audio),
            (ARCHIVE_EXTENSIONS, Self::Archive),
            (CODE_EXTENSIONS, Self::Code),
        ];
        table
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, category)| *category)
            .unwrap_or(Self::Other)
    }

    /// Classify a file by the extension of its name.
    pub fn from_file_name(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => Self::Other,
        }
    }

    /// Classify a file by its MIME type.
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.to_ascii_lowercase();
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence {
            m if m.starts_with("image/") => Self::Image,
            m if m.starts_with("video/") => Self::Video,
            m if m.starts_with("audio/") => Self::Audio,
            "text/csv" | "application/vnd.ms-excel" => Self::Spreadsheet,
            m if m.contains("spreadsheetml") => Self::Spreadsheet,
            m if m.contains("presentationml") || m == "application/vnd.ms-powerpoint" => {
                Self::Presentation
            }
            "application/json" | "application/xml" | "text/html" | "text/css"
            | "text/javascript" | "application/javascript" => Self::Code,
            "application/pdf" | "application/msword" => Self::Document,
            m if m.contains("wordprocessingml") || m.starts_with("text/") => Self::Document,
            "application/zip" | "application/x-tar" | "application/gzip"
            | "application/x-7z-compressed" | "application/vnd.rar" | "application/x-bzip2" => {
                Self::Archive
            }
            _ => Self::Other,
        }
    }

    /// Parse a declared category tag. Unknown tags become [`FileCategory::Other`].
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::Other)
    }

    /// Return the wire tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "document",
            Self::Spreadsheet => "spreadsheet",
            Self::Presentation => "presentation",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Archive => "archive",
            Self::Code => "code",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == tag)
            .ok_or_else(|| format!("unknown file category '{s}'"))
    }
}
