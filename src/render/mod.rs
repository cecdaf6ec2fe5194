//! Symbol rendering pipeline.
//!
//! This module is organized into submodules:
//! - `defaults`: Named style and encoding constants
//! - `style`: FillCode -> stroke/fill resolution
//! - `pin`: Pin endpoint/anchor/rotation resolution
//! - `arc`: Arc radius and sweep resolution
//! - `svg`: Viewport composition and SVG document emission
//!
//! [`render_document`] walks one symbol's primitive lists in a fixed order
//! (rectangles, arcs, circles, polylines, pins, texts), flips every
//! coordinate into display space, resolves styles and geometry, and
//! accumulates extents into a bounding box that lives exactly as long as
//! the call. The result is an ordered list of positioned shape descriptors
//! plus the padded viewport.

pub mod arc;
pub mod defaults;
pub mod pin;
pub mod style;
pub mod svg;

pub use arc::ArcPath;
pub use pin::{PinLayout, TextAnchor};
pub use style::StrokeFill;

use crate::symbol::{
    Arc, Circle, DrawPrimitive, Pin, Polyline, Rectangle, Symbol, SymbolDefinition, Text,
};
use crate::types::{BoundingBox, DisplayPoint};

/// Rendering options.
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// When set, a bold `library:component` caption is drawn beneath the
    /// symbol, using this as the library name.
    pub caption_library: Option<String>,
}

/// The final document frame: the padded bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub min_x: i32,
    pub min_y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// Degenerate frame for a symbol with no drawable primitives.
    pub const EMPTY: Viewport = Viewport {
        min_x: 0,
        min_y: 0,
        width: 0,
        height: 0,
    };

    fn from_box(b: &BoundingBox) -> Self {
        Viewport {
            min_x: b.min_x,
            min_y: b.min_y,
            width: b.width(),
            height: b.height(),
        }
    }
}

/// A positioned text label. Pin labels ride inside a rotated group and use
/// baseline shifts to stay clear of the leg; free texts nudge their Y by
/// half the font size instead. These nudges are the only place fractional
/// coordinates enter the output.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub position: DisplayPoint,
    pub content: String,
    pub font_size: i32,
    pub color: &'static str,
    pub anchor: TextAnchor,
    pub baseline_shift: Option<f64>,
    pub y_nudge: f64,
    pub bold: bool,
}

/// One vector shape descriptor, ready for SVG emission.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderedShape {
    Rect {
        insert: DisplayPoint,
        width: i32,
        height: i32,
        style: StrokeFill,
    },
    Circle {
        center: DisplayPoint,
        radius: i32,
        style: StrokeFill,
    },
    Arc {
        path: ArcPath,
        style: StrokeFill,
    },
    Polyline {
        points: Vec<DisplayPoint>,
        style: StrokeFill,
    },
    Line {
        start: DisplayPoint,
        end: DisplayPoint,
        style: StrokeFill,
    },
    Text(TextLabel),
    /// A pin: marker circle, leg, and labels, rotated as one group about
    /// the pin's connection point.
    PinGroup {
        rotation_deg: i32,
        origin: DisplayPoint,
        children: Vec<RenderedShape>,
    },
}

/// Ordered shape descriptors plus the viewport framing them.
#[derive(Clone, Debug)]
pub struct RenderedDocument {
    pub shapes: Vec<RenderedShape>,
    pub viewport: Viewport,
}

/// Render one symbol into positioned shapes and a padded viewport.
pub fn render_document(symbol: &Symbol, options: &RenderOptions) -> RenderedDocument {
    let mut bounds = BoundingBox::new();
    let mut shapes = Vec::new();

    for prim in symbol.drawing.iter() {
        if prim.unit() > 1 {
            continue;
        }
        let shape = match prim {
            DrawPrimitive::Rectangle(r) => render_rectangle(r, &mut bounds),
            DrawPrimitive::Arc(a) => render_arc(a, &mut bounds),
            DrawPrimitive::Circle(c) => render_circle(c, &mut bounds),
            DrawPrimitive::Polyline(p) => render_polyline(p, &mut bounds),
            DrawPrimitive::Pin(p) => render_pin(p, &symbol.definition, &mut bounds),
            DrawPrimitive::Text(t) => render_text(t),
        };
        shapes.push(shape);
    }

    if shapes.is_empty() {
        return RenderedDocument {
            shapes,
            viewport: Viewport::EMPTY,
        };
    }

    // Free texts never feed the box, so a text-only symbol still frames
    // around the origin.
    if bounds.is_empty() {
        bounds.include(DisplayPoint::new(0, 0));
    }

    // The caption hangs below the padded frame's bottom edge. It is placed
    // from the box but never included in it, otherwise it would push the
    // frame down and chase itself.
    if let Some(library) = &options.caption_library {
        shapes.push(RenderedShape::Text(TextLabel {
            position: DisplayPoint::new(
                0,
                bounds.max_y + defaults::VIEWPORT_PADDING - defaults::CAPTION_FONT_SIZE,
            ),
            content: format!("{}:{}", library, symbol.name),
            font_size: defaults::CAPTION_FONT_SIZE,
            color: defaults::CAPTION_COLOR,
            anchor: TextAnchor::Middle,
            baseline_shift: None,
            y_nudge: 0.0,
            bold: true,
        }));
    }

    bounds.pad(defaults::VIEWPORT_PADDING);
    crate::log::debug!(
        min_x = bounds.min_x,
        min_y = bounds.min_y,
        width = bounds.width(),
        height = bounds.height(),
        "padded viewport"
    );

    RenderedDocument {
        shapes,
        viewport: Viewport::from_box(&bounds),
    }
}

fn render_rectangle(rect: &Rectangle, bounds: &mut BoundingBox) -> RenderedShape {
    let a = rect.start.to_display();
    let b = rect.end.to_display();
    bounds.include(a);
    bounds.include(b);

    RenderedShape::Rect {
        insert: DisplayPoint::new(a.x.min(b.x), a.y.min(b.y)),
        width: (b.x - a.x).abs(),
        height: (b.y - a.y).abs(),
        style: style::resolve(rect.fill, rect.thickness),
    }
}

fn render_circle(circle: &Circle, bounds: &mut BoundingBox) -> RenderedShape {
    let center = circle.center.to_display();
    bounds.include_with_radius(center, circle.radius);

    RenderedShape::Circle {
        center,
        radius: circle.radius,
        style: style::resolve(circle.fill, circle.thickness),
    }
}

fn render_arc(a: &Arc, bounds: &mut BoundingBox) -> RenderedShape {
    let center = a.center.to_display();
    let path = arc::resolve(
        center,
        a.start_point.to_display(),
        a.end_point.to_display(),
        a.start_angle,
        a.end_angle,
    );
    bounds.include_with_radius(center, path.radius.ceil() as i32);

    RenderedShape::Arc {
        path,
        style: style::resolve(a.fill, a.thickness),
    }
}

fn render_polyline(poly: &Polyline, bounds: &mut BoundingBox) -> RenderedShape {
    let points: Vec<DisplayPoint> = poly.points.iter().map(|p| p.to_display()).collect();
    for p in &points {
        bounds.include(*p);
    }

    RenderedShape::Polyline {
        points,
        style: style::resolve(poly.fill, poly.thickness),
    }
}

fn render_pin(pin: &Pin, definition: &SymbolDefinition, bounds: &mut BoundingBox) -> RenderedShape {
    let layout = pin::resolve(
        pin.position.to_display(),
        pin.length,
        pin.direction,
        definition.text_offset,
    );
    // Extents use the pre-rotation endpoints, matching the drawn frame of
    // the original renderer.
    bounds.include(layout.start);
    bounds.include(layout.stop);

    let mut children = vec![
        RenderedShape::Circle {
            center: layout.start,
            radius: defaults::PIN_MARKER_RADIUS,
            style: style::pin_marker(),
        },
        RenderedShape::Line {
            start: layout.start,
            end: layout.stop,
            style: style::resolve(crate::symbol::FillCode::None, pin.thickness),
        },
        RenderedShape::Text(TextLabel {
            position: layout.etype_anchor,
            content: pin.electrical_type.label().to_string(),
            font_size: defaults::ETYPE_FONT_SIZE,
            color: defaults::ETYPE_COLOR,
            anchor: layout.text_anchor,
            baseline_shift: None,
            y_nudge: 0.0,
            bold: false,
        }),
    ];

    if definition.draw_pin_name {
        let label = if definition.text_offset == 0 {
            TextLabel {
                position: layout.mid,
                content: pin.name.clone(),
                font_size: pin.name_text_size,
                color: defaults::PIN_NAME_COLOR,
                anchor: TextAnchor::Middle,
                baseline_shift: Some(layout.mirror as f64 * pin.name_text_size as f64 / 2.0),
                y_nudge: 0.0,
                bold: false,
            }
        } else {
            TextLabel {
                position: layout.name_far_anchor,
                content: pin.name.clone(),
                font_size: pin.name_text_size,
                color: defaults::PIN_NAME_COLOR,
                anchor: layout.text_anchor.flipped(),
                baseline_shift: None,
                y_nudge: 0.0,
                bold: false,
            }
        };
        children.push(RenderedShape::Text(label));
    }

    if definition.draw_pin_number {
        children.push(RenderedShape::Text(TextLabel {
            position: layout.mid,
            content: pin.number.clone(),
            font_size: pin.num_text_size,
            color: defaults::PIN_NUMBER_COLOR,
            anchor: TextAnchor::Middle,
            baseline_shift: Some(-layout.mirror as f64 * pin.num_text_size as f64 / 2.0),
            y_nudge: 0.0,
            bold: false,
        }));
    }

    RenderedShape::PinGroup {
        rotation_deg: layout.rotation_deg,
        origin: layout.start,
        children,
    }
}

fn render_text(text: &Text) -> RenderedShape {
    RenderedShape::Text(TextLabel {
        position: text.position.to_display(),
        content: text.text.clone(),
        font_size: text.text_size,
        color: defaults::TEXT_COLOR,
        anchor: TextAnchor::Middle,
        baseline_shift: None,
        y_nudge: text.text_size as f64 / 2.0,
        bold: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{Drawing, ElectricalType, FillCode, PinDirection};
    use crate::types::LibPoint;

    fn definition() -> SymbolDefinition {
        SymbolDefinition {
            text_offset: 40,
            draw_pin_name: true,
            draw_pin_number: true,
        }
    }

    fn symbol(drawing: Drawing) -> Symbol {
        Symbol {
            name: "U1".to_string(),
            definition: definition(),
            drawing,
        }
    }

    fn passive_pin(unit: i32) -> Pin {
        Pin {
            position: LibPoint::new(0, 0),
            length: 100,
            direction: PinDirection::Right,
            electrical_type: ElectricalType::Passive,
            name: "A".to_string(),
            number: "1".to_string(),
            name_text_size: 50,
            num_text_size: 50,
            thickness: 0,
            unit,
        }
    }

    // ==================== Unit filter tests ====================

    #[test]
    fn unit_above_one_is_excluded_from_output_and_bounds() {
        let drawing = Drawing {
            rectangles: vec![
                Rectangle {
                    start: LibPoint::new(-100, 100),
                    end: LibPoint::new(100, -100),
                    thickness: 0,
                    fill: FillCode::None,
                    unit: 1,
                },
                Rectangle {
                    start: LibPoint::new(-900, 900),
                    end: LibPoint::new(900, -900),
                    thickness: 0,
                    fill: FillCode::None,
                    unit: 2,
                },
            ],
            ..Drawing::default()
        };
        let doc = render_document(&symbol(drawing), &RenderOptions::default());

        assert_eq!(doc.shapes.len(), 1);
        assert_eq!(doc.viewport.min_x, -350);
        assert_eq!(doc.viewport.width, 700);
    }

    #[test]
    fn unit_zero_is_rendered() {
        let drawing = Drawing {
            pins: vec![passive_pin(0)],
            ..Drawing::default()
        };
        let doc = render_document(&symbol(drawing), &RenderOptions::default());
        assert_eq!(doc.shapes.len(), 1);
    }

    // ==================== Viewport tests ====================

    #[test]
    fn empty_symbol_renders_degenerate_viewport() {
        let doc = render_document(&symbol(Drawing::default()), &RenderOptions::default());
        assert!(doc.shapes.is_empty());
        assert_eq!(doc.viewport, Viewport::EMPTY);
    }

    #[test]
    fn text_only_symbol_frames_around_origin() {
        let drawing = Drawing {
            texts: vec![Text {
                position: LibPoint::new(0, 0),
                text: "hello".to_string(),
                text_size: 50,
                unit: 1,
            }],
            ..Drawing::default()
        };
        let doc = render_document(&symbol(drawing), &RenderOptions::default());
        assert_eq!(doc.viewport.min_x, -250);
        assert_eq!(doc.viewport.min_y, -250);
        assert_eq!(doc.viewport.width, 500);
        assert_eq!(doc.viewport.height, 500);
    }

    #[test]
    fn rectangle_viewport_is_padded_box() {
        let drawing = Drawing {
            rectangles: vec![Rectangle {
                start: LibPoint::new(-100, 100),
                end: LibPoint::new(100, -100),
                thickness: 0,
                fill: FillCode::Filled,
                unit: 1,
            }],
            ..Drawing::default()
        };
        let doc = render_document(&symbol(drawing), &RenderOptions::default());
        assert_eq!(doc.viewport.min_x, -350);
        assert_eq!(doc.viewport.min_y, -350);
        assert_eq!(doc.viewport.width, 700);
        assert_eq!(doc.viewport.height, 700);
    }

    // ==================== Shape tests ====================

    #[test]
    fn rectangle_is_normalized_into_display_space() {
        let drawing = Drawing {
            rectangles: vec![Rectangle {
                start: LibPoint::new(-100, 100),
                end: LibPoint::new(100, -100),
                thickness: 0,
                fill: FillCode::Filled,
                unit: 1,
            }],
            ..Drawing::default()
        };
        let doc = render_document(&symbol(drawing), &RenderOptions::default());
        match &doc.shapes[0] {
            RenderedShape::Rect {
                insert,
                width,
                height,
                style,
            } => {
                assert_eq!(*insert, DisplayPoint::new(-100, -100));
                assert_eq!((*width, *height), (200, 200));
                assert_eq!(style.stroke_width, 8);
                assert_eq!(style.fill, "#840000");
                assert_eq!(style.fill_opacity, 1);
            }
            other => panic!("expected rectangle, got {:?}", other),
        }
    }

    #[test]
    fn circle_expands_bounds_by_radius() {
        let drawing = Drawing {
            circles: vec![Circle {
                center: LibPoint::new(0, 0),
                radius: 50,
                thickness: 0,
                fill: FillCode::None,
                unit: 1,
            }],
            ..Drawing::default()
        };
        let doc = render_document(&symbol(drawing), &RenderOptions::default());
        assert_eq!(doc.viewport.min_x, -300);
        assert_eq!(doc.viewport.width, 600);
    }

    #[test]
    fn arc_sweep_follows_raw_angle_order() {
        let drawing = Drawing {
            arcs: vec![Arc {
                center: LibPoint::new(0, 0),
                start_point: LibPoint::new(100, 0),
                end_point: LibPoint::new(0, 100),
                start_angle: 900,
                end_angle: 0,
                thickness: 0,
                fill: FillCode::None,
                unit: 1,
            }],
            ..Drawing::default()
        };
        let doc = render_document(&symbol(drawing), &RenderOptions::default());
        match &doc.shapes[0] {
            RenderedShape::Arc { path, .. } => {
                assert_eq!(path.sweep, 1);
                assert_eq!(path.radius, 100.0);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    // ==================== Pin group tests ====================

    #[test]
    fn pin_group_contains_marker_leg_and_labels() {
        let drawing = Drawing {
            pins: vec![passive_pin(1)],
            ..Drawing::default()
        };
        let doc = render_document(&symbol(drawing), &RenderOptions::default());
        match &doc.shapes[0] {
            RenderedShape::PinGroup {
                rotation_deg,
                origin,
                children,
            } => {
                assert_eq!(*rotation_deg, 0);
                assert_eq!(*origin, DisplayPoint::new(0, 0));
                // marker, leg, etype, name, number
                assert_eq!(children.len(), 5);
                match &children[0] {
                    RenderedShape::Circle { radius, style, .. } => {
                        assert_eq!(*radius, 10);
                        assert_eq!(style.stroke_width, 1);
                    }
                    other => panic!("expected marker circle, got {:?}", other),
                }
                match &children[2] {
                    RenderedShape::Text(label) => {
                        assert_eq!(label.content, "Passive");
                        assert_eq!(label.color, "#000084");
                        assert_eq!(label.font_size, 50);
                    }
                    other => panic!("expected etype label, got {:?}", other),
                }
            }
            other => panic!("expected pin group, got {:?}", other),
        }
    }

    #[test]
    fn pin_labels_are_gated_by_definition_flags() {
        let mut sym = symbol(Drawing {
            pins: vec![passive_pin(1)],
            ..Drawing::default()
        });
        sym.definition.draw_pin_name = false;
        sym.definition.draw_pin_number = false;

        let doc = render_document(&sym, &RenderOptions::default());
        match &doc.shapes[0] {
            RenderedShape::PinGroup { children, .. } => assert_eq!(children.len(), 3),
            other => panic!("expected pin group, got {:?}", other),
        }
    }

    #[test]
    fn zero_offset_names_center_on_the_leg() {
        let mut sym = symbol(Drawing {
            pins: vec![passive_pin(1)],
            ..Drawing::default()
        });
        sym.definition.text_offset = 0;

        let doc = render_document(&sym, &RenderOptions::default());
        match &doc.shapes[0] {
            RenderedShape::PinGroup { children, .. } => match &children[3] {
                RenderedShape::Text(label) => {
                    assert_eq!(label.position, DisplayPoint::new(50, 0));
                    assert_eq!(label.anchor, TextAnchor::Middle);
                    assert_eq!(label.baseline_shift, Some(25.0));
                }
                other => panic!("expected name label, got {:?}", other),
            },
            other => panic!("expected pin group, got {:?}", other),
        }
    }

    #[test]
    fn offset_names_hang_past_the_leg_with_flipped_anchor() {
        let doc = render_document(
            &symbol(Drawing {
                pins: vec![passive_pin(1)],
                ..Drawing::default()
            }),
            &RenderOptions::default(),
        );
        match &doc.shapes[0] {
            RenderedShape::PinGroup { children, .. } => match &children[3] {
                RenderedShape::Text(label) => {
                    assert_eq!(label.position, DisplayPoint::new(140, 0));
                    assert_eq!(label.anchor, TextAnchor::Start);
                    assert_eq!(label.baseline_shift, None);
                }
                other => panic!("expected name label, got {:?}", other),
            },
            other => panic!("expected pin group, got {:?}", other),
        }
    }

    #[test]
    fn up_pin_number_nudges_opposite_to_name() {
        let mut sym = symbol(Drawing {
            pins: vec![Pin {
                direction: PinDirection::Up,
                ..passive_pin(1)
            }],
            ..Drawing::default()
        });
        sym.definition.text_offset = 0;

        let doc = render_document(&sym, &RenderOptions::default());
        match &doc.shapes[0] {
            RenderedShape::PinGroup {
                rotation_deg,
                children,
                ..
            } => {
                assert_eq!(*rotation_deg, 270);
                let shifts: Vec<_> = children
                    .iter()
                    .filter_map(|c| match c {
                        RenderedShape::Text(label) => label.baseline_shift,
                        _ => None,
                    })
                    .collect();
                // name mirrored down, number mirrored up
                assert_eq!(shifts, vec![-25.0, 25.0]);
            }
            other => panic!("expected pin group, got {:?}", other),
        }
    }

    // ==================== Caption tests ====================

    #[test]
    fn caption_sits_under_the_padded_box() {
        let drawing = Drawing {
            rectangles: vec![Rectangle {
                start: LibPoint::new(-100, 100),
                end: LibPoint::new(100, -100),
                thickness: 0,
                fill: FillCode::None,
                unit: 1,
            }],
            ..Drawing::default()
        };
        let options = RenderOptions {
            caption_library: Some("device".to_string()),
        };
        let doc = render_document(&symbol(drawing), &options);

        match doc.shapes.last().unwrap() {
            RenderedShape::Text(label) => {
                assert_eq!(label.content, "device:U1");
                // unpadded max_y (100) + padding (250) - caption size (50)
                assert_eq!(label.position, DisplayPoint::new(0, 300));
                assert!(label.bold);
            }
            other => panic!("expected caption, got {:?}", other),
        }
        // caption is placed from the box but never included in it
        assert_eq!(doc.viewport.height, 700);
    }

    #[test]
    fn no_caption_without_library_name() {
        let drawing = Drawing {
            pins: vec![passive_pin(1)],
            ..Drawing::default()
        };
        let doc = render_document(&symbol(drawing), &RenderOptions::default());
        assert_eq!(doc.shapes.len(), 1);
    }
}
