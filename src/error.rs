//! Typed error type for diagram rendering.
//!
//! There is no recovery anywhere in this crate: the first failure aborts the
//! run. The variants exist so the binary (and tests) can report which stage
//! of the SVG→PNG pipeline failed and for which output path.

use thiserror::Error;

/// Top-level error type for the rendering pipeline.
#[derive(Debug, Error)]
pub enum DiagramError {
    // -----------------------------------------------------------------------
    // SVG rasterization
    // -----------------------------------------------------------------------
    /// The generated SVG document could not be parsed by usvg.
    #[error("SVG parse failed: {0}")]
    SvgParse(#[from] resvg::usvg::Error),

    /// A tiny-skia pixmap could not be allocated for the canvas.
    #[error("pixmap allocation failed for {width}x{height} canvas")]
    PixmapAlloc {
        /// Requested pixmap width in pixels.
        width: u32,
        /// Requested pixmap height in pixels.
        height: u32,
    },

    // -----------------------------------------------------------------------
    // PNG output
    // -----------------------------------------------------------------------
    /// The rasterized pixels could not be encoded as PNG.
    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] image::ImageError),

    /// The encoded PNG could not be written to its destination, including
    /// the case where the output directory does not exist.
    #[error("output write failed for '{path}': {source}")]
    OutputWrite {
        /// Destination path of the write that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
