//! Gesture vector geometry.
//!
//! Pure functions that turn surface dimensions or element frames into
//! press-hold-move-release drag descriptions. Nothing here touches a driver,
//! so the geometry is unit-testable without a live backend; execution happens
//! in [`search`](crate::search).
//!
//! Full-surface scroll vectors span from 80% to 20% of the surface along the
//! scroll axis, centered on the other axis. Element-relative swipes drag from
//! the element's right edge to its left edge at its vertical midpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::element::{ElementFrame, SurfaceSize};

/// A point on the surface, in screen points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// Direction of a full-surface scroll gesture.
///
/// Named for the direction the finger travels: [`SwipeDirection::Up`] drags
/// from low on the surface toward the top, which scrolls content upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Finger moves toward the top of the surface.
    Up,
    /// Finger moves toward the bottom of the surface.
    Down,
    /// Finger moves toward the left edge.
    Left,
    /// Finger moves toward the right edge.
    Right,
}

/// A press-hold-move-release drag: press at `start`, hold for `hold`, move to
/// `end`, release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureVector {
    /// Where the press lands.
    pub start: Point,
    /// Where the release happens.
    pub end: Point,
    /// How long the press is held before moving.
    pub hold: Duration,
}

impl GestureVector {
    /// Clamps both endpoints into the surface bounds.
    ///
    /// Element-relative vectors can reach outside the surface when the
    /// element is partially offscreen; drivers reject out-of-bounds touch
    /// points, so the caller clamps before executing.
    pub fn clamp_to(mut self, surface: SurfaceSize) -> Self {
        let clamp = |p: Point| Point {
            x: p.x.clamp(0.0, surface.width),
            y: p.y.clamp(0.0, surface.height),
        };
        self.start = clamp(self.start);
        self.end = clamp(self.end);
        self
    }
}

/// Computes a full-surface scroll vector along `direction`.
///
/// The drag spans 80% to 20% of the surface on the scroll axis and is
/// centered on the other axis, so it works on any surface size without
/// hard-coded coordinates.
pub fn scroll_vector(
    surface: SurfaceSize,
    direction: SwipeDirection,
    hold: Duration,
) -> GestureVector {
    let mid_x = surface.width / 2.0;
    let mid_y = surface.height / 2.0;
    let (start, end) = match direction {
        SwipeDirection::Up => (
            Point { x: mid_x, y: surface.height * 0.8 },
            Point { x: mid_x, y: surface.height * 0.2 },
        ),
        SwipeDirection::Down => (
            Point { x: mid_x, y: surface.height * 0.2 },
            Point { x: mid_x, y: surface.height * 0.8 },
        ),
        SwipeDirection::Left => (
            Point { x: surface.width * 0.8, y: mid_y },
            Point { x: surface.width * 0.2, y: mid_y },
        ),
        SwipeDirection::Right => (
            Point { x: surface.width * 0.2, y: mid_y },
            Point { x: surface.width * 0.8, y: mid_y },
        ),
    };
    GestureVector { start, end, hold }
}

/// Computes an element-relative horizontal swipe from the element's right
/// edge to its left edge, at its vertical midpoint.
pub fn element_swipe_left_vector(frame: ElementFrame, hold: Duration) -> GestureVector {
    let mid_y = frame.y + frame.height / 2.0;
    GestureVector {
        start: Point { x: frame.x + frame.width, y: mid_y },
        end: Point { x: frame.x, y: mid_y },
        hold,
    }
}
