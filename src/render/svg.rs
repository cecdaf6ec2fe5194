//! SVG document emission.
//!
//! Serializes a [`RenderedDocument`] into an `svg::Document`: the viewport
//! becomes the `viewBox`, and the fit policy is "center and scale to fill"
//! (`xMidYMid slice` - uniform scale, overflow cropped rather than the
//! drawing distorted). A degenerate viewport emits a zero-sized frame with
//! no content instead of dividing by zero anywhere.

use svg::Document;
use svg::Node;
use svg::node::element::{
    Circle as SvgCircle, Group, Line as SvgLine, Path, Polyline as SvgPolyline,
    Rectangle as SvgRect, Text as SvgText,
};

use super::{ArcPath, RenderedDocument, RenderedShape, StrokeFill, TextLabel, defaults};

/// Compose the final SVG document.
pub fn to_document(doc: &RenderedDocument) -> Document {
    let vp = doc.viewport;
    let mut out = Document::new()
        .set("viewBox", (vp.min_x, vp.min_y, vp.width, vp.height))
        .set("preserveAspectRatio", "xMidYMid slice");

    for shape in &doc.shapes {
        out = out.add(shape_node(shape));
    }
    out
}

fn shape_node(shape: &RenderedShape) -> Box<dyn Node> {
    match shape {
        RenderedShape::Rect {
            insert,
            width,
            height,
            style,
        } => {
            let mut rect = SvgRect::new()
                .set("x", insert.x)
                .set("y", insert.y)
                .set("width", *width)
                .set("height", *height);
            apply_stroke_fill(&mut rect, style);
            Box::new(rect)
        }
        RenderedShape::Circle {
            center,
            radius,
            style,
        } => {
            let mut circle = SvgCircle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", *radius);
            apply_stroke_fill(&mut circle, style);
            Box::new(circle)
        }
        RenderedShape::Arc { path, style } => {
            let mut arc = Path::new().set("d", arc_path_data(path));
            apply_stroke_fill(&mut arc, style);
            Box::new(arc)
        }
        RenderedShape::Polyline { points, style } => {
            let joined = points
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let mut polyline = SvgPolyline::new().set("points", joined);
            apply_stroke_fill(&mut polyline, style);
            Box::new(polyline)
        }
        RenderedShape::Line { start, end, style } => {
            let mut line = SvgLine::new()
                .set("x1", start.x)
                .set("y1", start.y)
                .set("x2", end.x)
                .set("y2", end.y);
            apply_stroke_fill(&mut line, style);
            Box::new(line)
        }
        RenderedShape::Text(label) => Box::new(text_node(label)),
        RenderedShape::PinGroup {
            rotation_deg,
            origin,
            children,
        } => {
            let transform = if *rotation_deg == 0 {
                "rotate(0)".to_string()
            } else {
                format!("rotate({}, {}, {})", rotation_deg, origin.x, origin.y)
            };
            let mut group = Group::new().set("transform", transform);
            for child in children {
                group = group.add(shape_node(child));
            }
            Box::new(group)
        }
    }
}

/// Two-point circular arc as SVG path data. The large-arc flag stays 0;
/// the sweep flag carries the arc's direction.
fn arc_path_data(path: &ArcPath) -> String {
    format!(
        "M {} {} A {} {} 0 0 {} {} {}",
        path.start.x,
        path.start.y,
        fmt_num(path.radius),
        fmt_num(path.radius),
        path.sweep,
        path.end.x,
        path.end.y
    )
}

fn text_node(label: &TextLabel) -> SvgText {
    let y = label.position.y as f64 + label.y_nudge;
    let mut text = SvgText::new(label.content.as_str())
        .set("x", label.position.x)
        .set("y", fmt_num(y))
        .set("text-anchor", label.anchor.as_str())
        .set("dominant-baseline", "middle")
        .set("font-size", label.font_size)
        .set("font-family", defaults::FONT_FAMILY)
        .set("fill", label.color);
    if let Some(shift) = label.baseline_shift {
        text = text.set("baseline-shift", fmt_num(shift));
    }
    if label.bold {
        text = text.set("font-weight", "bold");
    }
    text
}

fn apply_stroke_fill<N: Node>(node: &mut N, style: &StrokeFill) {
    node.assign("fill", style.fill);
    node.assign("fill-opacity", style.fill_opacity as i32);
    node.assign("stroke", style.stroke);
    node.assign("stroke-width", style.stroke_width);
    node.assign("stroke-opacity", style.stroke_opacity as i32);
    node.assign("stroke-linejoin", "round");
    node.assign("stroke-linecap", "round");
}

/// Format without a trailing `.0` so integer-valued coordinates stay
/// integers in the output.
fn fmt_num(v: f64) -> String {
    if v == v.trunc() {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
