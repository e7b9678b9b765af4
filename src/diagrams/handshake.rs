//! Handshake byte-layout diagram.
//!
//! A 68-unit horizontal strip subdivided into the five handshake fields,
//! with numeric offset labels under each field boundary:
//!
//! ```text
//! <len=19><"BitTorrent protocol"><8 reserved><20 info_hash><20 peer_id>
//! ```

use crate::svg::{SvgCanvas, TextStyle};

use super::{Diagram, palette, pt};

/// One strip segment: byte offset, byte width, label, fill.
pub(super) const SEGMENTS: [(u32, u32, &str, &str); 5] = [
    (0, 1, "Length\n(1 byte)", palette::RED_FILL),
    (1, 19, "String: 'BitTorrent protocol'\n(19 bytes)", palette::BLUE_FILL),
    (20, 8, "Reserved\n(8 bytes)", palette::YELLOW_FILL),
    (28, 20, "Info Hash\n(20 bytes)", palette::GREEN_FILL),
    (48, 20, "Peer ID\n(20 bytes)", palette::ORANGE_FILL),
];

/// Total handshake length in bytes; the strip spans exactly this range.
pub(super) const TOTAL_BYTES: u32 = 68;

const WIDTH: u32 = 1800;
const HEIGHT: u32 = 450;

const MARGIN: f32 = 40.0;
const SCALE: f32 = (WIDTH as f32 - 2.0 * MARGIN) / TOTAL_BYTES as f32;

const STRIP_TOP: f32 = 142.0;
const STRIP_BOTTOM: f32 = 358.0;
const OFFSET_BASELINE: f32 = 394.0;

/// Map a byte offset to its x pixel coordinate.
fn x(offset: u32) -> f32 {
    MARGIN + offset as f32 * SCALE
}

pub struct HandshakeLayout;

impl Diagram for HandshakeLayout {
    fn title(&self) -> &'static str {
        "Handshake Message Structure (68 Bytes)"
    }

    fn file_name(&self) -> &'static str {
        "handshake_bytes.png"
    }

    fn canvas_size(&self) -> (u32, u32) {
        (WIDTH, HEIGHT)
    }

    fn paint(&self, canvas: &mut SvgCanvas) {
        for (start, width, label, fill) in SEGMENTS {
            canvas.rect(
                x(start),
                STRIP_TOP,
                width as f32 * SCALE,
                STRIP_BOTTOM - STRIP_TOP,
                fill,
                palette::BLACK,
                2.0,
            );
            canvas.text(
                x(start) + width as f32 * SCALE / 2.0,
                (STRIP_TOP + STRIP_BOTTOM) / 2.0,
                label,
                &TextStyle {
                    size: pt(10.0),
                    bold: true,
                    ..Default::default()
                },
            );

            // Byte offset marker under the segment's start boundary.
            offset_label(canvas, start);
        }
        offset_label(canvas, TOTAL_BYTES);
    }
}

fn offset_label(canvas: &mut SvgCanvas, offset: u32) {
    canvas.text(
        x(offset),
        OFFSET_BASELINE,
        &offset.to_string(),
        &TextStyle {
            size: pt(8.0),
            ..Default::default()
        },
    );
}
