//! # cloudbox-view
//!
//! In-memory view state for the Cloudbox client. Every component here is
//! synchronous and owned by the screen that created it:
//!
//! - [`folder`]: flat folder list to tree, move-target validation, and the
//!   navigator that tracks expansion and selection.
//! - [`viewport`]: pan/zoom/rotate over a previewed image.
//! - [`preview`]: preview-mode dispatch and the preview dialog state machine.
//! - [`query`]: client-side filter/sort over a fetched file list, plus the
//!   search history.

pub mod folder;
pub mod preview;
pub mod query;
pub mod viewport;

pub use folder::{FolderNavigator, SelectionLabel, VisibleRow};
pub use preview::{MediaPreviewController, PreviewDescriptor, PreviewMode, PreviewPhase};
pub use query::{CategoryFilter, ListQuery, SearchHistory};
pub use viewport::{PointerCapture, ViewportState, ViewportTransform};
