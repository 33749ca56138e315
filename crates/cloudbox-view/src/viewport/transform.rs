//! Pointer, wheel, and toolbar handling for the image viewer.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use cloudbox_core::config::preview::PreviewConfig;

use super::capture::{CaptureGuard, NoopCapture, PointerCapture};
use super::state::{Point, ViewportState, step_rotation, step_zoom};

struct DragSession {
    anchor: Point,
    pan_at_start: Point,
    moved: bool,
    _capture: CaptureGuard,
}

/// Drives a [`ViewportState`] from UI events.
///
/// Every handler is total. Missing or non-finite pointer coordinates are
/// ignored. A drag holds a [`CaptureGuard`] which is released on pointer-up,
/// pointer-leave, reset, or when the transform is dropped.
pub struct ViewportTransform {
    state: ViewportState,
    zoom_enabled: bool,
    rotation_enabled: bool,
    capture: Arc<dyn PointerCapture>,
    drag: Option<DragSession>,
    suppress_click: bool,
}

impl ViewportTransform {
    /// A transform with zoom and rotation enabled and no host capture.
    pub fn new() -> Self {
        Self::with_capture(Arc::new(NoopCapture))
    }

    /// A transform that acquires document-level capture from `capture`
    /// while dragging.
    pub fn with_capture(capture: Arc<dyn PointerCapture>) -> Self {
        Self {
            state: ViewportState::IDENTITY,
            zoom_enabled: true,
            rotation_enabled: true,
            capture,
            drag: None,
            suppress_click: false,
        }
    }

    /// A transform gated by the preview settings.
    pub fn from_config(config: &PreviewConfig, capture: Arc<dyn PointerCapture>) -> Self {
        let mut transform = Self::with_capture(capture);
        transform.zoom_enabled = config.enable_zoom;
        transform.rotation_enabled = config.enable_rotation;
        transform
    }

    /// The current state.
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Zoom in percent.
    pub fn zoom_percent(&self) -> u32 {
        self.state.zoom_percent
    }

    /// Rotation in degrees.
    pub fn rotation_degrees(&self) -> u16 {
        self.state.rotation_degrees
    }

    /// Pan offset.
    pub fn pan(&self) -> Point {
        self.state.pan
    }

    /// Whether a document-level capture is currently held.
    pub fn is_capturing(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether zoom actions are accepted.
    pub fn zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    /// Whether rotate actions are accepted.
    pub fn rotation_enabled(&self) -> bool {
        self.rotation_enabled
    }

    /// Handle a wheel notch with the cursor at `cursor_offset` from the
    /// image's visual center. Returns whether the zoom changed.
    ///
    /// A negative or zero `delta_y` zooms in. When the zoom changes the pan
    /// moves by `offset * (1 - new / old)` so the image point under the
    /// cursor stays put. A missing offset zooms about the center.
    pub fn on_wheel(&mut self, delta_y: f64, cursor_offset: Option<Point>) -> bool {
        if !self.zoom_enabled || delta_y.is_nan() {
            return false;
        }
        let offset = cursor_offset
            .filter(Point::is_finite)
            .unwrap_or(Point::ORIGIN);

        let old_zoom = self.state.zoom_percent;
        let new_zoom = step_zoom(old_zoom, delta_y <= 0.0);
        if new_zoom == old_zoom {
            return false;
        }

        let factor = 1.0 - f64::from(new_zoom) / f64::from(old_zoom);
        self.state.zoom_percent = new_zoom;
        self.state.pan = self.state.pan + offset * factor;
        true
    }

    /// Handle a wheel notch with the cursor at `cursor` in viewport
    /// coordinates (relative to the viewport center).
    pub fn on_wheel_at(&mut self, delta_y: f64, cursor: Point) -> bool {
        let offset = cursor.is_finite().then(|| cursor - self.state.pan);
        self.on_wheel(delta_y, offset)
    }

    /// Toolbar zoom in, about the image center.
    pub fn zoom_in(&mut self) -> bool {
        self.step_centered(true)
    }

    /// Toolbar zoom out, about the image center.
    pub fn zoom_out(&mut self) -> bool {
        self.step_centered(false)
    }

    fn step_centered(&mut self, zoom_in: bool) -> bool {
        if !self.zoom_enabled {
            return false;
        }
        let next = step_zoom(self.state.zoom_percent, zoom_in);
        let changed = next != self.state.zoom_percent;
        self.state.zoom_percent = next;
        changed
    }

    /// Rotate a quarter turn clockwise.
    pub fn rotate(&mut self) -> bool {
        if !self.rotation_enabled {
            return false;
        }
        self.state.rotation_degrees = step_rotation(self.state.rotation_degrees);
        true
    }

    /// Return to the identity state, ending any drag.
    pub fn reset(&mut self) {
        self.end_drag();
        self.suppress_click = false;
        self.state = ViewportState::IDENTITY;
    }

    /// Primary-button click on the image.
    ///
    /// Toggles drag mode, unless it completes a press/release pair that
    /// panned the image.
    pub fn on_click(&mut self) {
        if std::mem::take(&mut self.suppress_click) {
            return;
        }
        if self.drag.is_some() {
            return;
        }
        self.state.drag_mode_enabled = !self.state.drag_mode_enabled;
        debug!(
            drag_mode = self.state.drag_mode_enabled,
            "Viewport drag mode toggled"
        );
    }

    /// Primary-button press at `position`. Starts a drag in drag mode.
    pub fn on_pointer_down(&mut self, position: Option<Point>) {
        self.suppress_click = false;
        let Some(position) = position.filter(Point::is_finite) else {
            return;
        };
        if !self.state.drag_mode_enabled {
            return;
        }

        self.end_drag();
        self.drag = Some(DragSession {
            anchor: position,
            pan_at_start: self.state.pan,
            moved: false,
            _capture: CaptureGuard::acquire(Arc::clone(&self.capture)),
        });
        self.state.is_dragging = true;
        debug!(x = position.x, y = position.y, "Viewport drag started");
    }

    /// Pointer move anywhere in the document.
    pub fn on_pointer_move(&mut self, position: Option<Point>) {
        let Some(position) = position.filter(Point::is_finite) else {
            return;
        };
        let Some(drag) = self.drag.as_mut() else {
            return;
        };

        let pan = drag.pan_at_start + (position - drag.anchor);
        if pan != drag.pan_at_start {
            drag.moved = true;
        }
        self.state.pan = pan;
    }

    /// Primary-button release anywhere in the document.
    pub fn on_pointer_up(&mut self) {
        if let Some(moved) = self.end_drag() {
            self.suppress_click = moved;
        }
    }

    /// The pointer left the tracked scope.
    pub fn on_pointer_leave(&mut self) {
        self.end_drag();
    }

    /// Ends the drag and releases its capture. Returns whether it moved
    /// the image, or `None` when no drag was active.
    fn end_drag(&mut self) -> Option<bool> {
        let drag = self.drag.take()?;
        self.state.is_dragging = false;
        debug!(moved = drag.moved, "Viewport drag ended");
        Some(drag.moved)
    }

    /// The image-space point (unscaled, unrotated, relative to the image
    /// center) shown at `screen` in viewport coordinates.
    pub fn image_point_at(&self, screen: Point) -> Point {
        let unscaled = (screen - self.state.pan) * (1.0 / self.state.scale());
        unscaled.rotated((360 - self.state.rotation_degrees) % 360)
    }

    /// Where `image` is drawn in viewport coordinates.
    pub fn screen_point_of(&self, image: Point) -> Point {
        self.state.pan + image.rotated(self.state.rotation_degrees) * self.state.scale()
    }
}

impl fmt::Debug for ViewportTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportTransform")
            .field("state", &self.state)
            .field("zoom_enabled", &self.zoom_enabled)
            .field("rotation_enabled", &self.rotation_enabled)
            .field("capturing", &self.drag.is_some())
            .finish()
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new()
    }
}
