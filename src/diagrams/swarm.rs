//! Swarm choking dynamics diagram.
//!
//! Four circular nodes and four styled directed edges illustrating the three
//! peer relationship states: reciprocal tit-for-tat exchange (green, both
//! directions), an optimistic unchoke (blue, dashed, one direction), and a
//! choked direction (red, dotted, flat bar head).

use crate::svg::{StrokeKind, SvgCanvas, TextStyle};

use super::{Diagram, palette, pt};

/// Node label, unit-square position (y up), fill color.
pub(super) const NODES: [(&str, f32, f32, &str); 4] = [
    ("Me", 0.5, 0.5, palette::YELLOW_FILL),
    ("Peer A", 0.5, 0.8, palette::BLUE_FILL),
    ("Peer B", 0.2, 0.2, palette::BLUE_FILL),
    ("Peer C", 0.8, 0.2, palette::BLUE_FILL),
];

const SIZE: u32 = 900;

const NODE_RADIUS: f32 = 55.0;
/// Gap between a node's boundary and the edge endpoint, so arrowheads stay
/// visible outside the circle.
const EDGE_GAP: f32 = 6.0;
/// Perpendicular bow of the reciprocal arcs, as a fraction of edge length.
const ARC_BOW: f32 = 0.12;

const EDGE_WIDTH: f32 = 4.0;

/// Map a unit-square position (y up) to pixel coordinates.
fn position(x: f32, y: f32) -> (f32, f32) {
    (x * SIZE as f32, (1.0 - y) * SIZE as f32)
}

// Indices into NODES, for naming edge endpoints.
const ME: usize = 0;
const PEER_A: usize = 1;
const PEER_B: usize = 2;
const PEER_C: usize = 3;

fn node_center(node: usize) -> (f32, f32) {
    let (_, x, y, _) = NODES[node];
    position(x, y)
}

/// Pull both endpoints back to the node boundaries.
fn trim(from: (f32, f32), to: (f32, f32)) -> ((f32, f32), (f32, f32)) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len = (dx * dx + dy * dy).sqrt();
    let (ux, uy) = (dx / len, dy / len);
    let margin = NODE_RADIUS + EDGE_GAP;
    (
        (from.0 + ux * margin, from.1 + uy * margin),
        (to.0 - ux * margin, to.1 - uy * margin),
    )
}

/// Straight directed edge between two nodes.
fn straight_edge(canvas: &mut SvgCanvas, from: usize, to: usize, color: &str, kind: StrokeKind, marker: &str) {
    let (a, b) = trim(node_center(from), node_center(to));
    let d = format!("M {:.2} {:.2} L {:.2} {:.2}", a.0, a.1, b.0, b.1);
    canvas.path(&d, color, EDGE_WIDTH, kind, Some(marker));
}

/// Directed edge bowed perpendicular to its direction. Reversing the
/// endpoints flips the bow side, so a reciprocal pair arcs apart.
fn curved_edge(canvas: &mut SvgCanvas, from: usize, to: usize, color: &str, kind: StrokeKind, marker: &str) {
    let (a, b) = trim(node_center(from), node_center(to));
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mx, my) = ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
    let (cx, cy) = (mx - dy * ARC_BOW, my + dx * ARC_BOW);
    let d = format!(
        "M {:.2} {:.2} Q {cx:.2} {cy:.2} {:.2} {:.2}",
        a.0, a.1, b.0, b.1
    );
    canvas.path(&d, color, EDGE_WIDTH, kind, Some(marker));
}

pub struct SwarmDynamics;

impl Diagram for SwarmDynamics {
    fn title(&self) -> &'static str {
        "Swarm Dynamics & Choking"
    }

    fn file_name(&self) -> &'static str {
        "swarm_dynamics.png"
    }

    fn canvas_size(&self) -> (u32, u32) {
        (SIZE, SIZE)
    }

    fn paint(&self, canvas: &mut SvgCanvas) {
        canvas.def_arrow_marker("arrow-green", palette::GREEN);
        canvas.def_arrow_marker("arrow-blue", palette::BLUE);
        canvas.def_bar_marker("bar-red", palette::RED);

        for (label, x, y, fill) in NODES {
            let (cx, cy) = position(x, y);
            canvas.circle(cx, cy, NODE_RADIUS, fill, palette::BLACK, 2.0);
            canvas.text(
                cx,
                cy,
                label,
                &TextStyle {
                    size: pt(10.0),
                    bold: true,
                    ..Default::default()
                },
            );
        }

        // Me <-> Peer A: tit-for-tat, both directions exchanging.
        curved_edge(canvas, ME, PEER_A, palette::GREEN, StrokeKind::Solid, "arrow-green");
        curved_edge(canvas, PEER_A, ME, palette::GREEN, StrokeKind::Solid, "arrow-green");

        // Me -> Peer B: optimistic unchoke.
        straight_edge(canvas, ME, PEER_B, palette::BLUE, StrokeKind::Dashed, "arrow-blue");

        // Peer C -/-> Me: choked direction, flat bar instead of an arrowhead.
        straight_edge(canvas, PEER_C, ME, palette::RED, StrokeKind::Dotted, "bar-red");

        annotation(canvas, 0.35, 0.65, "Tit-for-Tat\n(Reciprocal)", palette::GREEN, true, -90.0);
        annotation(canvas, 0.35, 0.35, "Optimistic\nUnchoke", palette::BLUE, false, 45.0);
        annotation(canvas, 0.65, 0.35, "Choked", palette::RED, false, -45.0);
    }
}

fn annotation(
    canvas: &mut SvgCanvas,
    x: f32,
    y: f32,
    label: &str,
    color: &'static str,
    bold: bool,
    rotation_deg: f32,
) {
    let (px, py) = position(x, y);
    canvas.text(
        px,
        py,
        label,
        &TextStyle {
            size: pt(9.0),
            color,
            bold,
            rotation_deg,
            ..Default::default()
        },
    );
}
