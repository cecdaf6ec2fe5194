//! Optional rasterization of a saved SVG document.
//!
//! Delegates to the external `rsvg-convert` tool, fire-and-forget: the exit
//! status is observed and returned but never retried or acted upon here.
//! Callers that don't care may drop the result.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Convert an SVG file to a PNG next to it. Failure of the external tool is
/// non-fatal; the caller sees the status and decides.
pub fn rasterize(svg_path: &Path, png_path: &Path) -> io::Result<ExitStatus> {
    let status = Command::new("rsvg-convert")
        .arg(svg_path)
        .arg("-o")
        .arg(png_path)
        .status()?;
    crate::log::debug!(success = status.success(), "rsvg-convert finished");
    Ok(status)
}
