//! Style and encoding constants (all distances in library units).
//!
//! These are named so the test suite can assert exact values independently
//! of rendering logic.

/// Stroke color for every drawn outline.
pub const OUTLINE_COLOR: &str = "#840000";
/// Fill color for background-filled ('f') shapes.
pub const BACKGROUND_FILL_COLOR: &str = "#FFFFC0";
/// Electrical-type label color.
pub const ETYPE_COLOR: &str = "#000084";
/// Pin name label color.
pub const PIN_NAME_COLOR: &str = "#008484";
/// Pin number label color.
pub const PIN_NUMBER_COLOR: &str = "#840000";
/// Free text label color.
pub const TEXT_COLOR: &str = "#840000";
/// Caption (library:component) color.
pub const CAPTION_COLOR: &str = "#000000";

/// Stroke width used when a primitive carries thickness 0.
pub const DEFAULT_THICKNESS: i32 = 8;
/// Radius of the small circle marking a pin's connection point.
pub const PIN_MARKER_RADIUS: i32 = 10;
/// Stroke width of the pin marker circle.
pub const PIN_MARKER_STROKE_WIDTH: i32 = 1;
/// How far the electrical-type label sits from the pin connection point.
pub const ETYPE_INSET: i32 = 10;
/// Font size of the electrical-type label.
pub const ETYPE_FONT_SIZE: i32 = 50;
/// Font size of the caption under the symbol.
pub const CAPTION_FONT_SIZE: i32 = 50;

/// Padding applied to all four sides of the final bounding box.
pub const VIEWPORT_PADDING: i32 = 250;

pub const FONT_FAMILY: &str = "osifont";
