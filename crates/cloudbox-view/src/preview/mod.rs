//! File preview: renderer dispatch, preview policy, and the dialog state
//! machine.

pub mod controller;
pub mod media;
pub mod mode;
pub mod policy;
pub mod table;

pub use controller::{
    ContentRequest, MediaPreviewController, PreviewBody, PreviewDescriptor, PreviewPayload,
    PreviewPhase,
};
pub use media::VideoState;
pub use mode::{PreviewMode, TextFlavor, preview_group};
pub use policy::{PreviewPolicy, UnsupportedReason};
pub use table::Table;
