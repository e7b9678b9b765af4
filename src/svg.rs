//! `SvgCanvas`: a small primitive painter that assembles an SVG document.
//!
//! The diagrams are authored as literal geometry, so the canvas only needs
//! rectangles, circles, lines, paths with arrowhead markers, and multi-line
//! text. Everything is serialized straight into the document string; there
//! is no retained scene graph.

/// Dash pattern applied to a stroked line or path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    Solid,
    Dashed,
    Dotted,
}

impl StrokeKind {
    fn dash_attr(self) -> &'static str {
        match self {
            StrokeKind::Solid => "",
            StrokeKind::Dashed => " stroke-dasharray=\"12 8\"",
            StrokeKind::Dotted => " stroke-dasharray=\"3 6\"",
        }
    }
}

/// Horizontal anchoring of a text block relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    fn attr_value(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Styling for a text block. `size` is in output pixels.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub size: f32,
    pub color: &'static str,
    pub bold: bool,
    pub italic: bool,
    pub anchor: TextAnchor,
    /// Clockwise rotation in degrees about the text position; 0 = none.
    pub rotation_deg: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 20.0,
            color: "#000000",
            bold: false,
            italic: false,
            anchor: TextAnchor::Middle,
            rotation_deg: 0.0,
        }
    }
}

/// Line height multiplier for multi-line text blocks.
const LINE_HEIGHT: f32 = 1.25;

/// An in-progress SVG document of fixed pixel dimensions.
pub struct SvgCanvas {
    width: u32,
    height: u32,
    defs: String,
    body: String,
}

impl SvgCanvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: &str) -> Self {
        let mut canvas = Self {
            width,
            height,
            defs: String::new(),
            body: String::new(),
        };
        canvas.body.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{background}\"/>"
        ));
        canvas
    }

    /// Define a triangular arrowhead marker usable via [`Self::path`].
    pub fn def_arrow_marker(&mut self, id: &str, color: &str) {
        self.defs.push_str(&format!(
            "<marker id=\"{id}\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" markerWidth=\"7\" markerHeight=\"7\" orient=\"auto-start-reverse\"><path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"{color}\"/></marker>"
        ));
    }

    /// Define a flat-bar marker (a blocked arrowhead) usable via [`Self::path`].
    pub fn def_bar_marker(&mut self, id: &str, color: &str) {
        self.defs.push_str(&format!(
            "<marker id=\"{id}\" viewBox=\"0 0 10 10\" refX=\"9\" refY=\"5\" markerWidth=\"7\" markerHeight=\"7\" orient=\"auto\"><rect x=\"6.5\" y=\"0\" width=\"2.5\" height=\"10\" fill=\"{color}\"/></marker>"
        ));
    }

    /// Axis-aligned rectangle. Pass `"none"` as `fill` for an outline.
    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: &str, stroke: &str, stroke_width: f32) {
        self.body.push_str(&format!(
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width:.1}\"/>"
        ));
    }

    /// Filled, stroked circle.
    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, fill: &str, stroke: &str, stroke_width: f32) {
        self.body.push_str(&format!(
            "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width:.1}\"/>"
        ));
    }

    /// Straight line segment.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: &str, width: f32, kind: StrokeKind) {
        self.body.push_str(&format!(
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{color}\" stroke-width=\"{width:.1}\"{}/>",
            kind.dash_attr()
        ));
    }

    /// Unfilled path from raw path data, optionally ending in a marker
    /// previously defined with [`Self::def_arrow_marker`] or
    /// [`Self::def_bar_marker`].
    pub fn path(&mut self, d: &str, color: &str, width: f32, kind: StrokeKind, marker_end: Option<&str>) {
        let marker = match marker_end {
            Some(id) => format!(" marker-end=\"url(#{id})\""),
            None => String::new(),
        };
        self.body.push_str(&format!(
            "<path d=\"{d}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{width:.1}\"{}{marker}/>",
            kind.dash_attr()
        ));
    }

    /// Text block, vertically centered on `y`. Embedded `\n` splits the
    /// content into stacked tspans.
    pub fn text(&mut self, x: f32, y: f32, content: &str, style: &TextStyle) {
        let lines: Vec<&str> = content.split('\n').collect();
        let line_height = style.size * LINE_HEIGHT;
        let total_height = line_height * lines.len() as f32;
        // First baseline such that the whole block centers on y.
        let start_y = y - total_height / 2.0 + style.size;

        let weight = if style.bold { " font-weight=\"bold\"" } else { "" };
        let slant = if style.italic { " font-style=\"italic\"" } else { "" };
        let transform = if style.rotation_deg != 0.0 {
            format!(" transform=\"rotate({:.1} {x:.2} {y:.2})\"", style.rotation_deg)
        } else {
            String::new()
        };

        self.body.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{start_y:.2}\" text-anchor=\"{}\" font-family=\"sans-serif\" font-size=\"{:.1}\" fill=\"{}\"{weight}{slant}{transform}>",
            style.anchor.attr_value(),
            style.size,
            style.color
        ));
        for (idx, line) in lines.iter().enumerate() {
            let dy = if idx == 0 { 0.0 } else { line_height };
            self.body.push_str(&format!(
                "<tspan x=\"{x:.2}\" dy=\"{dy:.2}\">{}</tspan>",
                escape_xml(line)
            ));
        }
        self.body.push_str("</text>");
    }

    /// Serialize the finished document.
    pub fn finish(self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height
        );
        if !self.defs.is_empty() {
            svg.push_str("<defs>");
            svg.push_str(&self.defs);
            svg.push_str("</defs>");
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }
}

/// Escape text content for embedding in SVG.
pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_xml_handles_markup_characters() {
        assert_eq!(escape_xml("a<b>&'c'\"d\""), "a&lt;b&gt;&amp;&apos;c&apos;&quot;d&quot;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn canvas_produces_well_formed_document() {
        let mut canvas = SvgCanvas::new(200, 100, "#FFFFFF");
        canvas.rect(10.0, 10.0, 50.0, 20.0, "#99FF99", "#000000", 2.0);
        canvas.text(35.0, 20.0, "hello", &TextStyle::default());
        let svg = canvas.finish();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 200 100\""));
        assert!(svg.contains("hello"));
        // No defs block when no marker was defined.
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn multiline_text_emits_one_tspan_per_line() {
        let mut canvas = SvgCanvas::new(100, 100, "#FFFFFF");
        canvas.text(50.0, 50.0, "top\nbottom", &TextStyle::default());
        let svg = canvas.finish();
        assert_eq!(svg.matches("<tspan").count(), 2);
    }

    #[test]
    fn marker_reference_points_at_definition() {
        let mut canvas = SvgCanvas::new(100, 100, "#FFFFFF");
        canvas.def_arrow_marker("arrow-green", "green");
        canvas.path("M 0 0 L 50 50", "green", 4.0, StrokeKind::Solid, Some("arrow-green"));
        let svg = canvas.finish();
        assert!(svg.contains("marker id=\"arrow-green\""));
        assert!(svg.contains("marker-end=\"url(#arrow-green)\""));
    }

    #[test]
    fn dash_patterns_follow_stroke_kind() {
        let mut canvas = SvgCanvas::new(100, 100, "#FFFFFF");
        canvas.line(0.0, 0.0, 10.0, 10.0, "blue", 4.0, StrokeKind::Dashed);
        canvas.line(0.0, 0.0, 10.0, 10.0, "red", 4.0, StrokeKind::Dotted);
        canvas.line(0.0, 0.0, 10.0, 10.0, "black", 4.0, StrokeKind::Solid);
        let svg = canvas.finish();
        assert_eq!(svg.matches("stroke-dasharray=\"12 8\"").count(), 1);
        assert_eq!(svg.matches("stroke-dasharray=\"3 6\"").count(), 1);
    }

    #[test]
    fn rotated_text_carries_a_transform() {
        let mut canvas = SvgCanvas::new(100, 100, "#FFFFFF");
        canvas.text(
            50.0,
            50.0,
            "tilted",
            &TextStyle {
                rotation_deg: -45.0,
                ..Default::default()
            },
        );
        let svg = canvas.finish();
        assert!(svg.contains("transform=\"rotate(-45.0 50.00 50.00)\""));
    }
}
