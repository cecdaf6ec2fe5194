//! symsvg - renders schematic symbol definitions to SVG for visual review.
//!
//! The input is one parsed symbol record (the kind a schematic library
//! reader produces): global definition attributes plus lists of geometric
//! primitives - rectangles, circles, arcs, polylines, pins, and texts. The
//! output is a vector document framed by a tight, padded bounding box, with
//! pin polarity markers, rotated pin labels, and electrical-type markers
//! placed exactly as the symbol intends them to appear.
//!
//! # Example
//!
//! ```
//! use symsvg::{render, RenderOptions, Symbol, SymbolDefinition, Drawing};
//!
//! let symbol = Symbol {
//!     name: "R".to_string(),
//!     definition: SymbolDefinition {
//!         text_offset: 0,
//!         draw_pin_name: true,
//!         draw_pin_number: true,
//!     },
//!     drawing: Drawing::default(),
//! };
//! let svg = render(&symbol, &RenderOptions::default());
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod errors;
pub mod log;
pub mod raster;
pub mod render;
pub mod symbol;
pub mod types;

pub use errors::RenderError;
pub use render::{RenderOptions, RenderedDocument, RenderedShape, render_document};
pub use symbol::{
    Arc, Circle, Drawing, ElectricalType, FillCode, Pin, PinDirection, Polyline, Rectangle,
    Symbol, SymbolDefinition, Text,
};
pub use types::{BoundingBox, DisplayPoint, LibPoint};

/// Render a symbol straight to SVG text.
pub fn render(symbol: &Symbol, options: &RenderOptions) -> String {
    let document = render_document(symbol, options);
    render::svg::to_document(&document).to_string()
}

/// Render a symbol and write the SVG document to a file.
pub fn render_to_file(
    symbol: &Symbol,
    options: &RenderOptions,
    path: impl AsRef<std::path::Path>,
) -> std::io::Result<()> {
    let document = render_document(symbol, options);
    svg::save(path, &render::svg::to_document(&document))
}
