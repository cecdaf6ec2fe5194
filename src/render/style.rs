//! Style resolution - maps a fill code and thickness onto the stroke/fill
//! tuple every drawn shape carries.

use crate::symbol::FillCode;

use super::defaults;

/// Resolved stroke and fill for one shape. Opacities are 0 or 1; there is
/// no translucency in symbol rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeFill {
    pub stroke: &'static str,
    pub stroke_opacity: u8,
    pub stroke_width: i32,
    pub fill: &'static str,
    pub fill_opacity: u8,
}

/// Resolve a fill code and raw thickness. Zero thickness falls back to the
/// default stroke width. Pure, no error cases: unknown fill codes have
/// already degraded to [`FillCode::None`].
pub fn resolve(fill: FillCode, thickness: i32) -> StrokeFill {
    let stroke_width = if thickness == 0 {
        defaults::DEFAULT_THICKNESS
    } else {
        thickness
    };
    let (fill, fill_opacity) = match fill {
        FillCode::Filled => (defaults::OUTLINE_COLOR, 1),
        FillCode::Background => (defaults::BACKGROUND_FILL_COLOR, 1),
        FillCode::None => ("none", 0),
    };
    StrokeFill {
        stroke: defaults::OUTLINE_COLOR,
        stroke_opacity: 1,
        stroke_width,
        fill,
        fill_opacity,
    }
}

/// Style of the small unfilled circle at a pin's connection point.
pub fn pin_marker() -> StrokeFill {
    StrokeFill {
        stroke: defaults::OUTLINE_COLOR,
        stroke_opacity: 1,
        stroke_width: defaults::PIN_MARKER_STROKE_WIDTH,
        fill: "none",
        fill_opacity: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_code_resolves_to_outline_color() {
        let s = resolve(FillCode::Filled, 6);
        assert_eq!(s.fill, "#840000");
        assert_eq!(s.fill_opacity, 1);
        assert_eq!(s.stroke, "#840000");
        assert_eq!(s.stroke_opacity, 1);
        assert_eq!(s.stroke_width, 6);
    }

    #[test]
    fn background_code_resolves_to_background_color() {
        let s = resolve(FillCode::Background, 10);
        assert_eq!(s.fill, "#FFFFC0");
        assert_eq!(s.fill_opacity, 1);
    }

    #[test]
    fn no_fill_has_zero_opacity() {
        let s = resolve(FillCode::None, 10);
        assert_eq!(s.fill, "none");
        assert_eq!(s.fill_opacity, 0);
    }

    #[test]
    fn zero_thickness_defaults_to_eight() {
        assert_eq!(resolve(FillCode::None, 0).stroke_width, 8);
    }

    #[test]
    fn pin_marker_is_thin_and_unfilled() {
        let s = pin_marker();
        assert_eq!(s.stroke_width, 1);
        assert_eq!(s.fill, "none");
    }
}
