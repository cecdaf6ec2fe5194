//! Pin geometry resolution.
//!
//! A pin is described by its connection point, a leg length, and a compass
//! direction. Everything else - the leg endpoint, label anchor points, the
//! group rotation, and the baseline mirror - derives from the direction by
//! exhaustive match. Up and Down pins reuse the Right-facing layout and are
//! rotated about the connection point at emission time; the mirror sign
//! keeps labels upright after that rotation.

use crate::symbol::PinDirection;
use crate::types::DisplayPoint;

use super::defaults;

/// Horizontal anchoring of a text label relative to its insertion point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }

    /// The opposite horizontal side, used for offset pin names which hang
    /// off the far end of the leg.
    pub fn flipped(self) -> Self {
        match self {
            TextAnchor::Start => TextAnchor::End,
            TextAnchor::End => TextAnchor::Start,
            TextAnchor::Middle => TextAnchor::Middle,
        }
    }
}

/// Resolved geometry for one pin, in display space, pre-rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinLayout {
    /// Connection point (the pin's origin and the rotation pivot).
    pub start: DisplayPoint,
    /// Non-connected end of the leg.
    pub stop: DisplayPoint,
    /// Midpoint of the leg, where zero-offset names and numbers center.
    pub mid: DisplayPoint,
    /// Insertion point of the electrical-type label.
    pub etype_anchor: DisplayPoint,
    /// Insertion point for names when the symbol's text offset is non-zero.
    pub name_far_anchor: DisplayPoint,
    /// Anchor side of the electrical-type label.
    pub text_anchor: TextAnchor,
    /// Group rotation about `start`, in degrees.
    pub rotation_deg: i32,
    /// Baseline nudge sign for name/number labels: +1, or -1 for Up pins.
    pub mirror: i32,
}

/// Compute a pin's layout from its (already sign-flipped) position, leg
/// length, direction, and the symbol-wide text offset.
pub fn resolve(
    position: DisplayPoint,
    length: i32,
    direction: PinDirection,
    text_offset: i32,
) -> PinLayout {
    let (x, y) = (position.x, position.y);
    let l = length;
    let inset = defaults::ETYPE_INSET;

    match direction {
        PinDirection::Right => PinLayout {
            start: position,
            stop: DisplayPoint::new(x + l, y),
            mid: DisplayPoint::new(x + l / 2, y),
            etype_anchor: DisplayPoint::new(x - inset, y),
            name_far_anchor: DisplayPoint::new(x + l + text_offset, y),
            text_anchor: TextAnchor::End,
            rotation_deg: 0,
            mirror: 1,
        },
        PinDirection::Left => PinLayout {
            start: position,
            stop: DisplayPoint::new(x - l, y),
            mid: DisplayPoint::new(x - l / 2, y),
            etype_anchor: DisplayPoint::new(x + inset, y),
            name_far_anchor: DisplayPoint::new(x - l - text_offset, y),
            text_anchor: TextAnchor::Start,
            rotation_deg: 0,
            mirror: 1,
        },
        PinDirection::Down => PinLayout {
            start: position,
            stop: DisplayPoint::new(x + l, y),
            mid: DisplayPoint::new(x + l / 2, y),
            etype_anchor: DisplayPoint::new(x + inset, y),
            name_far_anchor: DisplayPoint::new(x + l + text_offset, y),
            text_anchor: TextAnchor::End,
            rotation_deg: 90,
            mirror: 1,
        },
        PinDirection::Up => PinLayout {
            start: position,
            stop: DisplayPoint::new(x + l, y),
            mid: DisplayPoint::new(x + l / 2, y),
            etype_anchor: DisplayPoint::new(x - inset, y),
            name_far_anchor: DisplayPoint::new(x + l + text_offset, y),
            text_anchor: TextAnchor::End,
            rotation_deg: 270,
            mirror: -1,
        },
    }
}
