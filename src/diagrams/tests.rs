//! Tests for the diagram definitions.

#[cfg(test)]
mod tests {
    use super::super::bitfield::BITS;
    use super::super::handshake::{SEGMENTS, TOTAL_BYTES};
    use super::super::{Bitfield, Diagram, HandshakeLayout, PiecesBlocks, SwarmDynamics, all, render_svg};

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn handshake_segments_cover_the_full_message() {
        // Widths are the documented field sizes, in order.
        let widths: Vec<u32> = SEGMENTS.iter().map(|(_, w, _, _)| *w).collect();
        assert_eq!(widths, vec![1, 19, 8, 20, 20]);

        // Contiguous from offset 0 through 68, no gaps or overlaps.
        let mut offset = 0;
        for (start, width, _, _) in SEGMENTS {
            assert_eq!(start, offset);
            offset += width;
        }
        assert_eq!(offset, TOTAL_BYTES);
    }

    #[test]
    fn bitfield_is_always_eight_cells() {
        assert_eq!(BITS.len(), 8);
        assert_eq!(BITS, [1, 0, 1, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn render_order_and_file_names_are_fixed() {
        let names: Vec<&str> = all().iter().map(|d| d.file_name()).collect();
        assert_eq!(
            names,
            vec![
                "handshake_bytes.png",
                "pieces_blocks.png",
                "swarm_dynamics.png",
                "bitfield.png",
            ]
        );
    }

    #[test]
    fn handshake_svg_has_five_segments_and_offset_labels() {
        let svg = render_svg(&HandshakeLayout);
        // Background plus the five field rectangles.
        assert_eq!(count(&svg, "<rect"), 6);
        assert!(svg.contains("Handshake Message Structure (68 Bytes)"));
        assert!(svg.contains("BitTorrent protocol"));
        // Offset labels 0 and 68 bracket the strip.
        assert!(svg.contains(">0</tspan>"));
        assert!(svg.contains(">68</tspan>"));
    }

    #[test]
    fn pieces_svg_has_piece_grid_block_grid_and_guides() {
        let svg = render_svg(&PiecesBlocks);
        // Background + file + 5 pieces + zoomed piece + 4 blocks.
        assert_eq!(count(&svg, "<rect"), 12);
        // Two dashed zoom guides.
        assert_eq!(count(&svg, "<line"), 2);
        assert!(svg.contains("Full File (e.g., 100 MB)"));
        assert!(svg.contains("Piece 4"));
        assert!(svg.contains("Block 3"));
    }

    #[test]
    fn swarm_svg_has_four_nodes_and_four_directed_edges() {
        let svg = render_svg(&SwarmDynamics);
        assert_eq!(count(&svg, "<circle"), 4);
        // Every edge carries an end marker; the choked one is the bar.
        assert_eq!(count(&svg, "marker-end"), 4);
        assert_eq!(count(&svg, "url(#arrow-green)"), 2);
        assert_eq!(count(&svg, "url(#arrow-blue)"), 1);
        assert_eq!(count(&svg, "url(#bar-red)"), 1);
        for label in ["Me", "Peer A", "Peer B", "Peer C"] {
            assert!(svg.contains(label), "missing node label {label}");
        }
        assert!(svg.contains("Tit-for-Tat"));
        assert!(svg.contains("Optimistic"));
        assert!(svg.contains("Choked"));
    }

    #[test]
    fn bitfield_svg_has_exactly_eight_cells() {
        let svg = render_svg(&Bitfield);
        // Background plus one rect per bit.
        assert_eq!(count(&svg, "<rect"), 1 + BITS.len());
        for i in 0..8 {
            assert!(svg.contains(&format!("Piece {i}")), "missing cell label {i}");
        }
        assert!(svg.contains("1 = Have Piece, 0 = Don&apos;t Have"));
    }

    #[test]
    fn canvas_sizes_match_documented_dimensions() {
        assert_eq!(HandshakeLayout.canvas_size(), (1800, 450));
        assert_eq!(PiecesBlocks.canvas_size(), (1500, 900));
        assert_eq!(SwarmDynamics.canvas_size(), (900, 900));
        assert_eq!(Bitfield.canvas_size(), (1500, 300));
    }
}
