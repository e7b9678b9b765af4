//! File → pieces → blocks decomposition diagram.
//!
//! Top row: a full file split into five equal pieces. Bottom row: one piece
//! zoomed into four equal blocks, connected by dashed guide lines. The size
//! captions ("100 MB", "256 KB", "16 KB") are illustrative text, not
//! computed from anything.

use crate::svg::{StrokeKind, SvgCanvas, TextStyle};

use super::{Diagram, palette, pt};

pub(super) const PIECE_COUNT: u32 = 5;
pub(super) const BLOCK_COUNT: u32 = 4;

const WIDTH: u32 = 1500;
const HEIGHT: u32 = 900;

// Layout space is 0..100 on both axes, y up, mapped onto the canvas with a
// band at the top reserved for the title.
fn x(u: f32) -> f32 {
    30.0 + u * 14.4
}

fn y(v: f32) -> f32 {
    870.0 - v * 8.0
}

/// Rectangle given in layout coordinates by its lower-left corner.
fn layout_rect(canvas: &mut SvgCanvas, u: f32, v: f32, w: f32, h: f32, fill: &str, stroke_width: f32) {
    canvas.rect(
        x(u),
        y(v + h),
        w * 14.4,
        h * 8.0,
        fill,
        palette::BLACK,
        stroke_width,
    );
}

pub struct PiecesBlocks;

impl Diagram for PiecesBlocks {
    fn title(&self) -> &'static str {
        "Files split into Pieces, Pieces split into Blocks"
    }

    fn file_name(&self) -> &'static str {
        "pieces_blocks.png"
    }

    fn canvas_size(&self) -> (u32, u32) {
        (WIDTH, HEIGHT)
    }

    fn paint(&self, canvas: &mut SvgCanvas) {
        // Full file band with the piece grid overlaid.
        layout_rect(canvas, 10.0, 60.0, 80.0, 20.0, palette::GREY_FILL, 4.0);
        canvas.text(
            x(50.0),
            y(70.0),
            "Full File (e.g., 100 MB)",
            &TextStyle {
                size: pt(12.0),
                bold: true,
                ..Default::default()
            },
        );
        for i in 0..PIECE_COUNT {
            let left = 10.0 + i as f32 * 16.0;
            layout_rect(canvas, left, 60.0, 16.0, 20.0, "none", 2.0);
            canvas.text(
                x(left + 8.0),
                y(85.0),
                &format!("Piece {i}"),
                &TextStyle {
                    size: pt(10.0),
                    ..Default::default()
                },
            );
        }

        // Dashed guides from piece 2's span down to the zoomed row.
        canvas.line(x(42.0), y(60.0), x(10.0), y(40.0), palette::BLACK, 2.0, StrokeKind::Dashed);
        canvas.line(x(58.0), y(60.0), x(90.0), y(40.0), palette::BLACK, 2.0, StrokeKind::Dashed);

        // One piece zoomed into its blocks.
        layout_rect(canvas, 10.0, 20.0, 80.0, 20.0, palette::GREEN_FILL, 4.0);
        canvas.text(
            x(50.0),
            y(30.0),
            "Piece N (e.g., 256 KB)",
            &TextStyle {
                size: pt(12.0),
                bold: true,
                ..Default::default()
            },
        );
        for i in 0..BLOCK_COUNT {
            let left = 10.0 + i as f32 * 20.0;
            layout_rect(canvas, left, 20.0, 20.0, 20.0, "none", 2.0);
            canvas.text(
                x(left + 10.0),
                y(15.0),
                &format!("Block {i}\n(16 KB)"),
                &TextStyle {
                    size: pt(9.0),
                    ..Default::default()
                },
            );
        }
    }
}
