//! Document-level pointer capture held for the length of a drag.
//!
//! While a pan gesture is in progress the host must deliver pointer moves
//! and releases from anywhere in the document, not just over the image.
//! The host provides that through [`PointerCapture`]; the viewport holds a
//! [`CaptureGuard`] for the duration of the drag and the guard releases the
//! capture exactly once when dropped.

use std::fmt;
use std::sync::Arc;

/// Identifier of one acquired capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureId(pub u64);

/// Host hook that installs and removes document-level pointer listeners.
pub trait PointerCapture: Send + Sync {
    /// Install listeners and return a handle for them.
    fn acquire(&self) -> CaptureId;

    /// Remove the listeners installed under `id`.
    fn release(&self, id: CaptureId);
}

/// A capture that installs nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn acquire(&self) -> CaptureId {
        CaptureId(0)
    }

    fn release(&self, _id: CaptureId) {}
}

/// Holds an acquired capture and releases it on drop.
pub struct CaptureGuard {
    capture: Arc<dyn PointerCapture>,
    id: CaptureId,
}

impl CaptureGuard {
    /// Acquire a capture from `capture`.
    pub fn acquire(capture: Arc<dyn PointerCapture>) -> Self {
        let id = capture.acquire();
        Self { capture, id }
    }

    /// The handle returned by the host.
    pub fn id(&self) -> CaptureId {
        self.id
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.capture.release(self.id);
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard").field("id", &self.id).finish()
    }
}
