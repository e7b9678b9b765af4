//! The four peerwire documentation diagrams.
//!
//! Each diagram is a unit type implementing [`Diagram`]; all geometry is
//! hard-coded literal data carried over from the original figures. The
//! canvases are sized in output pixels at 150 DPI, with point-based font
//! sizes converted through [`pt`].
//!
//! # Sub-modules
//!
//! - [`handshake`] — 68-byte handshake layout strip
//! - [`pieces`] — file → pieces → blocks decomposition
//! - [`swarm`] — swarm choking dynamics graph
//! - [`bitfield`] — 8-cell availability bitmap

mod bitfield;
mod handshake;
mod pieces;
mod swarm;

mod tests;

pub use bitfield::Bitfield;
pub use handshake::HandshakeLayout;
pub use pieces::PiecesBlocks;
pub use swarm::SwarmDynamics;

use crate::svg::{SvgCanvas, TextStyle};

/// A single renderable documentation diagram.
pub trait Diagram {
    /// Title drawn centered across the top of the canvas.
    fn title(&self) -> &'static str;
    /// Output file name within the images directory.
    fn file_name(&self) -> &'static str;
    /// Canvas dimensions in pixels.
    fn canvas_size(&self) -> (u32, u32);
    /// Paint the diagram body onto the canvas.
    fn paint(&self, canvas: &mut SvgCanvas);
}

/// All diagrams, in the order they are rendered.
pub fn all() -> Vec<Box<dyn Diagram>> {
    vec![
        Box::new(HandshakeLayout),
        Box::new(PiecesBlocks),
        Box::new(SwarmDynamics),
        Box::new(Bitfield),
    ]
}

/// Baseline of the title line shared by every diagram.
const TITLE_BASELINE: f32 = 40.0;

/// Build the complete SVG document for one diagram: background, title, body.
pub fn render_svg(diagram: &dyn Diagram) -> String {
    let (width, height) = diagram.canvas_size();
    let mut canvas = SvgCanvas::new(width, height, palette::WHITE);
    canvas.text(
        width as f32 / 2.0,
        TITLE_BASELINE,
        diagram.title(),
        &TextStyle {
            size: pt(14.0),
            ..Default::default()
        },
    );
    diagram.paint(&mut canvas);
    canvas.finish()
}

/// Convert a font size in points to output pixels at 150 DPI.
pub(crate) fn pt(points: f32) -> f32 {
    points * (150.0 / 72.0)
}

/// Fill and stroke colors shared by the diagrams.
pub(crate) mod palette {
    pub const WHITE: &str = "#FFFFFF";
    pub const BLACK: &str = "#000000";

    // Segment / cell fills.
    pub const RED_FILL: &str = "#FF9999";
    pub const BLUE_FILL: &str = "#99CCFF";
    pub const YELLOW_FILL: &str = "#FFFF99";
    pub const GREEN_FILL: &str = "#99FF99";
    pub const ORANGE_FILL: &str = "#FFCC99";
    pub const GREY_FILL: &str = "#DDDDDD";

    // Swarm edge colors.
    pub const GREEN: &str = "green";
    pub const BLUE: &str = "blue";
    pub const RED: &str = "red";
}
