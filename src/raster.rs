//! SVG→PNG conversion and file output.

use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::error::DiagramError;

/// Lazily-loaded system font database for SVG text rendering.
///
/// Loading system fonts is expensive (~50ms), so it happens once and the
/// database is shared across all rasterization calls.
static FONTDB: LazyLock<Arc<fontdb::Database>> = LazyLock::new(|| {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    log::debug!("loaded {} font faces from system", db.len());
    Arc::new(db)
});

/// Rasterize an SVG document to PNG bytes on a white background.
///
/// Pixel dimensions come from the document's own width/height.
pub fn svg_to_png_bytes(svg: &str) -> Result<Vec<u8>, DiagramError> {
    use image::ImageEncoder;
    use image::codecs::png::PngEncoder;

    let opts = resvg::usvg::Options {
        fontdb: FONTDB.clone(),
        ..Default::default()
    };
    let tree = resvg::usvg::Tree::from_str(svg, &opts)?;
    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or(DiagramError::PixmapAlloc { width, height })?;
    pixmap.fill(resvg::tiny_skia::Color::WHITE);

    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    let mut png_buf = Vec::new();
    let encoder = PngEncoder::new(&mut png_buf);
    encoder.write_image(
        pixmap.data(),
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )?;

    log::debug!("rasterized {width}x{height} canvas ({} bytes)", png_buf.len());
    Ok(png_buf)
}

/// Rasterize `svg` and write the PNG to `path`.
///
/// A missing parent directory surfaces here as [`DiagramError::OutputWrite`];
/// no directory is created.
pub fn render_to_file(svg: &str, path: &Path) -> Result<(), DiagramError> {
    let png = svg_to_png_bytes(svg)?;
    std::fs::write(path, &png).map_err(|source| DiagramError::OutputWrite {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rect-only document so the test needs no fonts on the machine.
    const SAMPLE: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"40\" height=\"30\" \
                          viewBox=\"0 0 40 30\">\
                          <rect x=\"5\" y=\"5\" width=\"30\" height=\"20\" fill=\"#99FF99\"/></svg>";

    #[test]
    fn png_dimensions_match_document_size() {
        let png = svg_to_png_bytes(SAMPLE).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!((img.width(), img.height()), (40, 30));
    }

    #[test]
    fn malformed_svg_is_a_parse_error() {
        let err = svg_to_png_bytes("this is not svg").unwrap_err();
        assert!(matches!(err, DiagramError::SvgParse(_)));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = render_to_file(SAMPLE, &path).unwrap_err();
        match err {
            DiagramError::OutputWrite { path: p, .. } => assert!(p.ends_with("out.png")),
            other => panic!("expected OutputWrite, got {other:?}"),
        }
    }
}
