//! Preview dialog state machine.
//!
//! The controller never fetches anything itself. `open` tells the host what
//! to fetch; the host reports back through `content_loaded` or `load_failed`,
//! tagging the report with the file it was for so that late responses for a
//! previously opened file are dropped.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use cloudbox_core::config::preview::PreviewConfig;
use cloudbox_core::types::FileId;
use cloudbox_entity::file::FileRecord;

use super::media::VideoState;
use super::mode::{PreviewMode, TextFlavor, preview_group};
use super::policy::{PreviewPolicy, UnsupportedReason};
use super::table::Table;
use crate::viewport::{NoopCapture, PointerCapture, ViewportTransform};

/// The file being previewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewDescriptor {
    /// File ID.
    pub id: FileId,
    /// File name including extension.
    pub name: String,
    /// Category tag declared for the file.
    pub declared_category: String,
    /// Size in bytes.
    pub size: u64,
}

impl PreviewDescriptor {
    /// Create a descriptor with a size of zero.
    pub fn new(
        id: impl Into<FileId>,
        name: impl Into<String>,
        declared_category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            declared_category: declared_category.into(),
            size: 0,
        }
    }

    /// Set the size in bytes.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Describe a listed file. Uses the declared type tag when present,
    /// otherwise the derived category.
    pub fn from_file(file: &FileRecord) -> Self {
        let declared_category = file
            .declared_type
            .clone()
            .unwrap_or_else(|| file.category().as_str().to_string());
        Self {
            id: file.id.clone(),
            name: file.name.clone(),
            declared_category,
            size: file.size,
        }
    }
}

/// What the host has to fetch after `open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRequest {
    /// Nothing; the preview is already settled.
    None,
    /// An authenticated byte-serving URL for the file.
    MediaUrl(FileId),
    /// The file's text content.
    TextBody(FileId),
}

/// Content delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewPayload {
    /// A URL the media element can load.
    MediaUrl(String),
    /// Raw text.
    Text(String),
}

/// A settled preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PreviewBody {
    /// Image at a URL.
    Image {
        /// Source URL.
        url: String,
    },
    /// Video at a URL.
    Video {
        /// Source URL.
        url: String,
    },
    /// Audio at a URL.
    Audio {
        /// Source URL.
        url: String,
    },
    /// Text content.
    Text {
        /// Rendering flavor.
        flavor: TextFlavor,
        /// The text.
        content: String,
    },
    /// Parsed table.
    Spreadsheet {
        /// The table.
        table: Table,
    },
    /// Download-only placeholder.
    Unsupported {
        /// Why no renderer is used.
        reason: UnsupportedReason,
    },
}

/// Lifecycle of the preview dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum PreviewPhase {
    /// Nothing open.
    #[default]
    Idle,
    /// Waiting for the host.
    Loading,
    /// Showing a preview.
    Ready(PreviewBody),
    /// Loading failed; shown inline.
    Failed {
        /// Message for the user.
        message: String,
    },
}

/// State of the preview dialog for one screen.
pub struct MediaPreviewController {
    policy: PreviewPolicy,
    auto_play: bool,
    show_metadata: bool,
    current: Option<PreviewDescriptor>,
    mode: PreviewMode,
    phase: PreviewPhase,
    viewport: ViewportTransform,
    video: VideoState,
}

impl MediaPreviewController {
    /// Create a controller with no document-level pointer capture.
    pub fn new(config: &PreviewConfig) -> Self {
        Self::with_capture(config, Arc::new(NoopCapture))
    }

    /// Create a controller whose image viewer captures the pointer through
    /// `capture` while dragging.
    pub fn with_capture(config: &PreviewConfig, capture: Arc<dyn PointerCapture>) -> Self {
        Self {
            policy: PreviewPolicy::from_config(config),
            auto_play: config.auto_play_videos,
            show_metadata: config.show_metadata,
            current: None,
            mode: PreviewMode::Unsupported,
            phase: PreviewPhase::Idle,
            viewport: ViewportTransform::from_config(config, capture),
            video: VideoState::new(config.auto_play_videos),
        }
    }

    /// Open `descriptor`, replacing whatever was open.
    pub fn open(&mut self, descriptor: PreviewDescriptor) -> ContentRequest {
        self.viewport.reset();
        self.video = VideoState::new(self.auto_play);
        self.mode = PreviewMode::dispatch(&descriptor.declared_category, &descriptor.name);

        let verdict = match preview_group(&descriptor.declared_category) {
            Some(group) => self.policy.check(group, descriptor.size),
            None => Err(UnsupportedReason::UnknownType),
        };
        let request = match verdict {
            Err(reason) => {
                debug!(file_id = %descriptor.id, ?reason, "Preview refused by policy");
                self.mode = PreviewMode::Unsupported;
                self.phase = PreviewPhase::Ready(PreviewBody::Unsupported { reason });
                ContentRequest::None
            }
            Ok(()) if self.mode.uses_media_url() => {
                self.phase = PreviewPhase::Loading;
                ContentRequest::MediaUrl(descriptor.id.clone())
            }
            Ok(()) if self.mode.needs_text_body() => {
                self.phase = PreviewPhase::Loading;
                ContentRequest::TextBody(descriptor.id.clone())
            }
            Ok(()) => {
                self.phase = PreviewPhase::Ready(PreviewBody::Unsupported {
                    reason: UnsupportedReason::UnknownType,
                });
                ContentRequest::None
            }
        };

        debug!(
            file_id = %descriptor.id,
            mode = self.mode.label(),
            "Preview opened"
        );
        self.current = Some(descriptor);
        request
    }

    /// The host delivered content for `file_id`. Returns whether it was
    /// applied.
    pub fn content_loaded(&mut self, file_id: &str, payload: PreviewPayload) -> bool {
        if !self.awaiting(file_id) {
            debug!(file_id, "Ignoring stale preview content");
            return false;
        }

        self.phase = match (self.mode, payload) {
            (PreviewMode::Image, PreviewPayload::MediaUrl(url)) => {
                PreviewPhase::Ready(PreviewBody::Image { url })
            }
            (PreviewMode::Video, PreviewPayload::MediaUrl(url)) => {
                PreviewPhase::Ready(PreviewBody::Video { url })
            }
            (PreviewMode::Audio, PreviewPayload::MediaUrl(url)) => {
                PreviewPhase::Ready(PreviewBody::Audio { url })
            }
            (PreviewMode::Text(flavor), PreviewPayload::Text(content)) => {
                PreviewPhase::Ready(PreviewBody::Text { flavor, content })
            }
            (PreviewMode::Spreadsheet, PreviewPayload::Text(content)) => {
                match Table::parse(&content) {
                    Ok(table) => PreviewPhase::Ready(PreviewBody::Spreadsheet { table }),
                    Err(e) => PreviewPhase::Failed {
                        message: e.to_string(),
                    },
                }
            }
            (mode, _) => {
                warn!(file_id, mode = mode.label(), "Preview payload does not fit renderer");
                PreviewPhase::Ready(PreviewBody::Unsupported {
                    reason: UnsupportedReason::ContentMismatch,
                })
            }
        };
        true
    }

    /// The host failed to fetch content for `file_id`. Returns whether the
    /// failure was applied.
    pub fn load_failed(&mut self, file_id: &str, error: impl fmt::Display) -> bool {
        if !self.awaiting(file_id) {
            debug!(file_id, "Ignoring stale preview failure");
            return false;
        }
        warn!(file_id, error = %error, "Preview load failed");
        self.phase = PreviewPhase::Failed {
            message: error.to_string(),
        };
        true
    }

    /// Close the dialog.
    pub fn close(&mut self) {
        self.viewport.reset();
        self.video = VideoState::new(self.auto_play);
        self.current = None;
        self.mode = PreviewMode::Unsupported;
        self.phase = PreviewPhase::Idle;
    }

    fn awaiting(&self, file_id: &str) -> bool {
        self.phase == PreviewPhase::Loading
            && self
                .current
                .as_ref()
                .is_some_and(|current| current.id.as_str() == file_id)
    }

    /// The open file.
    pub fn current(&self) -> Option<&PreviewDescriptor> {
        self.current.as_ref()
    }

    /// The open file, when the header should show its size and name.
    pub fn metadata(&self) -> Option<&PreviewDescriptor> {
        self.current.as_ref().filter(|_| self.show_metadata)
    }

    /// The renderer chosen for the open file.
    pub fn mode(&self) -> PreviewMode {
        self.mode
    }

    /// The lifecycle phase.
    pub fn phase(&self) -> &PreviewPhase {
        &self.phase
    }

    /// Whether content is being fetched.
    pub fn is_loading(&self) -> bool {
        self.phase == PreviewPhase::Loading
    }

    /// The image viewer.
    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    /// The image viewer, for event dispatch.
    pub fn viewport_mut(&mut self) -> &mut ViewportTransform {
        &mut self.viewport
    }

    /// The video player state.
    pub fn video(&self) -> &VideoState {
        &self.video
    }

    /// The video player state, for button dispatch.
    pub fn video_mut(&mut self) -> &mut VideoState {
        &mut self.video
    }
}

impl fmt::Debug for MediaPreviewController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaPreviewController")
            .field("current", &self.current)
            .field("mode", &self.mode)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
