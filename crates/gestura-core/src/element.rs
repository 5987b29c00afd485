//! Shared UI element types for accessibility-based automation.
//!
//! This module defines the data structures representing UI elements as
//! reported by an automation backend. An element value is a snapshot of the
//! rendered tree at the moment of a query: callers must not hold one across
//! polls, since the underlying element may be destroyed and recreated between
//! frames. Waiting code re-resolves its locator on every check instead.

use serde::{Deserialize, Serialize};

/// A snapshot of a UI element from the accessibility hierarchy.
///
/// Returned by [`AutomationDriver`](crate::driver::AutomationDriver) queries.
/// Contains whatever accessibility information the backend reports; any field
/// may be absent for a given element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiElement {
    /// The unique accessibility identifier for this element.
    #[serde(default)]
    pub identifier: Option<String>,

    /// The accessibility label, typically the user-visible text.
    #[serde(default)]
    pub label: Option<String>,

    /// The current value of the element, e.g. text field contents.
    #[serde(default)]
    pub value: Option<String>,

    /// The type of UI element (e.g., "Button", "TextField", "View").
    #[serde(rename = "type", default)]
    pub element_type: Option<String>,

    /// The element's frame (position and size) in screen coordinates.
    #[serde(default)]
    pub frame: Option<ElementFrame>,
}

/// The frame (position and dimensions) of a UI element.
///
/// Coordinates are in screen points, with the origin at the top-left
/// corner of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementFrame {
    /// The x-coordinate of the element's top-left corner.
    pub x: f64,
    /// The y-coordinate of the element's top-left corner.
    pub y: f64,
    /// The width of the element in points.
    pub width: f64,
    /// The height of the element in points.
    pub height: f64,
}

/// Dimensions of the addressable surface (screen or window), in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    /// Surface width in points.
    pub width: f64,
    /// Surface height in points.
    pub height: f64,
}
