//! The symbol data model.
//!
//! These types mirror what an external library-file reader produces for one
//! schematic component: global definition attributes plus per-kind lists of
//! draw primitives. All coordinates are integers in library units (Y-up);
//! the renderer flips them into display space.
//!
//! The single-character codes (`fill`, `direction`, `electrical_type`) come
//! with `from_code` constructors so a reader can map raw record fields onto
//! the closed enums. Unknown fill and electrical-type codes are tolerated;
//! an unknown direction is an error, never a silent fallback.

use crate::errors::RenderError;
use crate::types::LibPoint;

/// Global component attributes from the symbol's DEF record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolDefinition {
    /// Pixel offset for pin name labels placed past the pin stop. Zero
    /// means names sit centered on the pin leg instead.
    pub text_offset: i32,
    pub draw_pin_name: bool,
    pub draw_pin_number: bool,
}

/// One schematic component's visual definition - the render unit.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
    pub definition: SymbolDefinition,
    pub drawing: Drawing,
}

/// Draw primitives keyed by kind, in the order the reader hands them over.
#[derive(Clone, Debug, Default)]
pub struct Drawing {
    pub rectangles: Vec<Rectangle>,
    pub circles: Vec<Circle>,
    pub arcs: Vec<Arc>,
    pub polylines: Vec<Polyline>,
    pub pins: Vec<Pin>,
    pub texts: Vec<Text>,
}

impl Drawing {
    /// Iterate every primitive in render order: rectangles, arcs, circles,
    /// polylines, pins, texts.
    pub fn iter(&self) -> impl Iterator<Item = DrawPrimitive<'_>> {
        self.rectangles
            .iter()
            .map(DrawPrimitive::Rectangle)
            .chain(self.arcs.iter().map(DrawPrimitive::Arc))
            .chain(self.circles.iter().map(DrawPrimitive::Circle))
            .chain(self.polylines.iter().map(DrawPrimitive::Polyline))
            .chain(self.pins.iter().map(DrawPrimitive::Pin))
            .chain(self.texts.iter().map(DrawPrimitive::Text))
    }
}

/// A tagged view over the six primitive kinds.
#[derive(Clone, Copy, Debug)]
pub enum DrawPrimitive<'a> {
    Rectangle(&'a Rectangle),
    Circle(&'a Circle),
    Arc(&'a Arc),
    Polyline(&'a Polyline),
    Pin(&'a Pin),
    Text(&'a Text),
}

impl DrawPrimitive<'_> {
    /// Sub-part index of a multi-part symbol. Only `unit <= 1` (the common
    /// or first unit) is rendered.
    pub fn unit(&self) -> i32 {
        match self {
            DrawPrimitive::Rectangle(p) => p.unit,
            DrawPrimitive::Circle(p) => p.unit,
            DrawPrimitive::Arc(p) => p.unit,
            DrawPrimitive::Polyline(p) => p.unit,
            DrawPrimitive::Pin(p) => p.unit,
            DrawPrimitive::Text(p) => p.unit,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {
    pub start: LibPoint,
    pub end: LibPoint,
    pub thickness: i32,
    pub fill: FillCode,
    pub unit: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Circle {
    pub center: LibPoint,
    pub radius: i32,
    pub thickness: i32,
    pub fill: FillCode,
    pub unit: i32,
}

/// A circular arc given by its center, both endpoints, and the start/end
/// angles in tenths of a degree (raw library convention, pre-flip).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arc {
    pub center: LibPoint,
    pub start_point: LibPoint,
    pub end_point: LibPoint,
    pub start_angle: i32,
    pub end_angle: i32,
    pub thickness: i32,
    pub fill: FillCode,
    pub unit: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polyline {
    pub points: Vec<LibPoint>,
    pub thickness: i32,
    pub fill: FillCode,
    pub unit: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pin {
    /// Connection point; the leg extends from here in `direction`.
    pub position: LibPoint,
    pub length: i32,
    pub direction: PinDirection,
    pub electrical_type: ElectricalType,
    pub name: String,
    pub number: String,
    pub name_text_size: i32,
    pub num_text_size: i32,
    pub thickness: i32,
    pub unit: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    pub position: LibPoint,
    pub text: String,
    pub text_size: i32,
    pub unit: i32,
}

/// Single-character style selector for closed shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FillCode {
    /// 'F' - solid foreground fill
    Filled,
    /// 'f' - background fill
    Background,
    #[default]
    None,
}

impl FillCode {
    /// Unknown codes fall through to no fill; this is not an error.
    pub fn from_code(code: char) -> Self {
        match code {
            'F' => FillCode::Filled,
            'f' => FillCode::Background,
            _ => FillCode::None,
        }
    }
}

/// The compass-like orientation a pin's leg extends in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinDirection {
    Right,
    Left,
    Up,
    Down,
}

impl PinDirection {
    /// Map a raw direction code. Anything outside R/L/U/D is rejected so
    /// pin layout never runs with an undefined orientation.
    pub fn from_code(code: char) -> Result<Self, RenderError> {
        match code {
            'R' => Ok(PinDirection::Right),
            'L' => Ok(PinDirection::Left),
            'U' => Ok(PinDirection::Up),
            'D' => Ok(PinDirection::Down),
            _ => Err(RenderError::InvalidDirection { code }),
        }
    }
}

/// The pin's signal role. Codes outside the known set pass through verbatim
/// and render as their raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElectricalType {
    Passive,
    Output,
    Input,
    PowerInput,
    Other(String),
}

impl ElectricalType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "P" => ElectricalType::Passive,
            "O" => ElectricalType::Output,
            "I" => ElectricalType::Input,
            "W" => ElectricalType::PowerInput,
            other => ElectricalType::Other(other.to_string()),
        }
    }

    /// The text rendered next to the pin connection point.
    pub fn label(&self) -> &str {
        match self {
            ElectricalType::Passive => "Passive",
            ElectricalType::Output => "Output",
            ElectricalType::Input => "Input",
            ElectricalType::PowerInput => "PowerInput",
            ElectricalType::Other(code) => code,
        }
    }
}

/// Convert a raw record field into an integer, failing the component render
/// on malformed input.
pub fn parse_int(field: &'static str, value: &str) -> Result<i32, RenderError> {
    value.trim().parse().map_err(|_| RenderError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
