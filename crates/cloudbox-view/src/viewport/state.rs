//! Viewport value types.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Smallest zoom, in percent.
pub const MIN_ZOOM: u32 = 25;
/// Largest zoom, in percent.
pub const MAX_ZOOM: u32 = 500;
/// Zoom change per wheel notch or toolbar click.
pub const ZOOM_STEP: u32 = 25;
/// Zoom of the identity state.
pub const DEFAULT_ZOOM: u32 = 100;
/// Rotation change per rotate action, in degrees.
pub const ROTATION_STEP: u16 = 90;

/// A 2D point or offset in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component (grows downward).
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rotate clockwise (on a y-down screen) by a multiple of 90 degrees.
    ///
    /// Quarter turns are applied exactly, without trigonometry.
    pub fn rotated(self, degrees: u16) -> Self {
        match degrees % 360 {
            90 => Self::new(-self.y, self.x),
            180 => Self::new(-self.x, -self.y),
            270 => Self::new(self.y, -self.x),
            _ => self,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Pan, zoom, and rotation of a previewed image.
///
/// `pan` is the offset of the image's visual center from the viewport
/// center. `zoom_percent` stays in `MIN_ZOOM..=MAX_ZOOM` and
/// `rotation_degrees` is one of 0, 90, 180, 270.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    /// Zoom in percent.
    pub zoom_percent: u32,
    /// Clockwise rotation in degrees.
    pub rotation_degrees: u16,
    /// Pan offset.
    pub pan: Point,
    /// Whether a pointer press starts a pan gesture.
    pub drag_mode_enabled: bool,
    /// Whether a pan gesture is in progress.
    pub is_dragging: bool,
}

impl ViewportState {
    /// `{100%, 0°, (0, 0), drag mode off, not dragging}`.
    pub const IDENTITY: ViewportState = ViewportState {
        zoom_percent: DEFAULT_ZOOM,
        rotation_degrees: 0,
        pan: Point::ORIGIN,
        drag_mode_enabled: false,
        is_dragging: false,
    };

    /// Zoom as a scale factor.
    pub fn scale(&self) -> f64 {
        f64::from(self.zoom_percent) / 100.0
    }

    /// Whether this is the identity state.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Step `zoom` one notch in or out, clamped to the allowed range.
pub fn step_zoom(zoom: u32, zoom_in: bool) -> u32 {
    let next = if zoom_in {
        zoom.saturating_add(ZOOM_STEP)
    } else {
        zoom.saturating_sub(ZOOM_STEP)
    };
    next.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// The next rotation after one quarter turn.
pub fn step_rotation(degrees: u16) -> u16 {
    (degrees % 360 + ROTATION_STEP) % 360
}
