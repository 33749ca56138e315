//! Image viewport: pan, zoom, and rotation driven by pointer and toolbar
//! events.

pub mod capture;
pub mod state;
pub mod transform;

pub use capture::{CaptureGuard, CaptureId, NoopCapture, PointerCapture};
pub use state::{MAX_ZOOM, MIN_ZOOM, Point, ROTATION_STEP, ViewportState, ZOOM_STEP};
pub use transform::ViewportTransform;
