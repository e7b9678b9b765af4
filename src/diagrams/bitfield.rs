//! Bitfield diagram: an 8-cell bitmap of piece availability.

use crate::svg::{SvgCanvas, TextStyle};

use super::{Diagram, palette, pt};

/// The illustrated availability bitmap. Always 8 entries.
pub(super) const BITS: [u8; 8] = [1, 0, 1, 1, 0, 0, 1, 0];

const WIDTH: u32 = 1500;
const HEIGHT: u32 = 300;

// Layout space is 0..10 across, 0..2 up, with the title band above it.
fn x(u: f32) -> f32 {
    u * 150.0
}

fn y(v: f32) -> f32 {
    290.0 - v * 115.0
}

pub struct Bitfield;

impl Diagram for Bitfield {
    fn title(&self) -> &'static str {
        "Bitfield Message (Bitmap of Available Pieces)"
    }

    fn file_name(&self) -> &'static str {
        "bitfield.png"
    }

    fn canvas_size(&self) -> (u32, u32) {
        (WIDTH, HEIGHT)
    }

    fn paint(&self, canvas: &mut SvgCanvas) {
        for (i, bit) in BITS.iter().enumerate() {
            let fill = if *bit == 1 {
                palette::GREEN_FILL
            } else {
                palette::GREY_FILL
            };
            let left = i as f32 + 1.0;
            canvas.rect(x(left), y(1.8), 150.0, 115.0, fill, palette::BLACK, 2.0);
            canvas.text(
                x(left + 0.5),
                y(1.3),
                &bit.to_string(),
                &TextStyle {
                    size: pt(20.0),
                    bold: true,
                    ..Default::default()
                },
            );
            canvas.text(
                x(left + 0.5),
                y(0.5),
                &format!("Piece {i}"),
                &TextStyle {
                    size: pt(9.0),
                    ..Default::default()
                },
            );
        }

        canvas.text(
            x(0.5),
            y(1.3),
            "Bits:",
            &TextStyle {
                size: pt(12.0),
                bold: true,
                ..Default::default()
            },
        );
        canvas.text(
            x(5.0),
            y(0.2),
            "1 = Have Piece, 0 = Don't Have",
            &TextStyle {
                size: pt(10.0),
                italic: true,
                ..Default::default()
            },
        );
    }
}
