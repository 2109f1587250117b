// SVG → PNG rasterization with resvg.

use std::sync::Arc;

use anyhow::{Context, Result};
use resvg::tiny_skia;
use resvg::usvg::{fontdb, Options, Tree};
use tracing::debug;

/// Output is 4× the SVG's intrinsic size unless configured otherwise.
pub const DEFAULT_SCALE: f32 = 4.0;

/// Render SVG bytes to a PNG at `scale` times the SVG's own size.
pub fn rasterize(svg: &[u8], scale: f32) -> Result<Vec<u8>> {
    if !scale.is_finite() || scale <= 0.0 {
        anyhow::bail!("Raster scale must be greater than zero, got {scale}");
    }

    // Badge text needs fonts; system fonts cover the Verdana/DejaVu fallbacks
    let mut fonts = fontdb::Database::new();
    fonts.load_system_fonts();
    debug!("Loaded {} font faces", fonts.len());

    let mut options = Options::default();
    options.fontdb = Arc::new(fonts);

    let tree = Tree::from_data(svg, &options).context("Failed to parse SVG badge")?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .with_context(|| format!("Cannot create a {width}x{height} pixmap"))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap.encode_png().context("Failed to encode PNG")
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
        <rect width="20" height="10" fill="#4f4f4f"/>
    </svg>"##;

    /// Width and height from the PNG IHDR chunk.
    fn png_dimensions(png: &[u8]) -> (u32, u32) {
        let width = u32::from_be_bytes(png[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(png[20..24].try_into().unwrap());
        (width, height)
    }

    #[test]
    fn test_default_scale_quadruples_size() {
        let png = rasterize(RECT_SVG, DEFAULT_SCALE).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(png_dimensions(&png), (80, 40));
    }

    #[test]
    fn test_custom_scale() {
        let png = rasterize(RECT_SVG, 1.0).unwrap();
        assert_eq!(png_dimensions(&png), (20, 10));
    }

    #[test]
    fn test_invalid_svg_rejected() {
        assert!(rasterize(b"not svg at all", DEFAULT_SCALE).is_err());
    }

    #[test]
    fn test_non_positive_scale_rejected() {
        assert!(rasterize(RECT_SVG, 0.0).is_err());
        assert!(rasterize(RECT_SVG, f32::NAN).is_err());
    }
}
