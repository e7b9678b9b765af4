//! Static documentation diagram generator for peerwire.
//!
//! Renders the four explanatory diagrams used by the peerwire docs —
//! handshake byte layout, file/piece/block decomposition, swarm choking
//! dynamics, and the bitfield bitmap — as PNG files under `docs/images/`.
//!
//! Every diagram is hard-coded vector geometry: it is serialized to an SVG
//! document ([`svg`]), rasterized with resvg, and encoded to PNG
//! ([`raster`]). There is no input of any kind; the output is a pure
//! function of the literals in [`diagrams`].
//!
//! # Sub-modules
//!
//! - [`diagrams`] — the four diagram definitions behind the [`diagrams::Diagram`] trait
//! - [`svg`] — the `SvgCanvas` primitive painter
//! - [`raster`] — SVG→PNG conversion and file output
//! - [`error`] — the crate error type
//! - [`logging`] — stderr logger for the binary

pub mod diagrams;
pub mod error;
pub mod logging;
pub mod raster;
pub mod svg;

pub use error::DiagramError;

use std::path::Path;

use diagrams::Diagram;

/// Directory the diagrams are written into, relative to the working
/// directory. Must exist before the run; nothing here creates it.
pub const OUTPUT_DIR: &str = "docs/images";

/// Line printed to stdout after a fully successful run.
pub const SUCCESS_MESSAGE: &str = "All diagrams generated successfully.";

/// Render every diagram into `out_dir`, in fixed order.
///
/// Stops at the first failure; already-written files are left in place.
pub fn generate_all(out_dir: &Path) -> Result<(), DiagramError> {
    for diagram in diagrams::all() {
        generate_one(diagram.as_ref(), out_dir)?;
    }
    Ok(())
}

/// Render a single diagram into `out_dir` under its documented file name.
pub fn generate_one(diagram: &dyn Diagram, out_dir: &Path) -> Result<(), DiagramError> {
    let path = out_dir.join(diagram.file_name());
    log::info!("rendering '{}' -> {}", diagram.title(), path.display());
    let svg = diagrams::render_svg(diagram);
    raster::render_to_file(&svg, &path)
}
