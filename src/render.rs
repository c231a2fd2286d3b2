//! Raster rendering of vector documents for visual comparison.
//!
//! Converts shapes back to pixels via tiny-skia and measures how well
//! the rendered coverage matches the source foreground.

use std::path::Path;

use kurbo::{BezPath, PathEl};

use crate::bitmap::PixelBuffer;
use crate::config::VectorizeConfig;
use crate::document::VectorDocument;
use crate::error::VectorizeError;
use crate::vectorize::classify::detect_background;

/// Overlap between the source foreground and the rendered document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterReport {
    /// Intersection over union of the two masks (1.0 when both are empty).
    pub iou: f64,
    pub overlap_px: u64,
    pub rendered_px: u64,
    pub source_px: u64,
}

/// Convert a kurbo `BezPath` to a `tiny_skia::Path`.
fn kurbo_to_tinyskia(bezpath: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for el in bezpath.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

/// Render every shape with its fill onto a transparent canvas.
///
/// No anti-aliasing, so each pixel is either covered or not.
pub fn render(document: &VectorDocument) -> Result<tiny_skia::Pixmap, VectorizeError> {
    let mut pixmap = tiny_skia::Pixmap::new(document.width, document.height).ok_or(
        VectorizeError::InvalidDimensions {
            width: document.width,
            height: document.height,
            len: 0,
        },
    )?;

    for shape in &document.shapes {
        let fill = shape.fill();
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(tiny_skia::Color::from_rgba8(fill.r, fill.g, fill.b, 255));
        paint.anti_alias = false;
        if let Some(path) = kurbo_to_tinyskia(&shape.to_bezpath()) {
            pixmap.fill_path(
                &path,
                &paint,
                tiny_skia::FillRule::Winding,
                tiny_skia::Transform::identity(),
                None,
            );
        }
    }

    Ok(pixmap)
}

/// Encode a pixmap to PNG bytes.
pub fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, VectorizeError> {
    let encode_err = |e: png::EncodingError| VectorizeError::Encode(e.to_string());
    let mut buf = Vec::new();
    let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().map_err(encode_err)?;
    writer.write_image_data(pixmap.data()).map_err(encode_err)?;
    writer.finish().map_err(encode_err)?;
    Ok(buf)
}

/// Render a document and write it as a PNG.
pub fn save_png(document: &VectorDocument, path: &Path) -> Result<(), VectorizeError> {
    let pixmap = render(document)?;
    std::fs::write(path, encode_png(&pixmap)?)?;
    Ok(())
}

/// Compare the rendered document against the source foreground
/// (opaque pixels that are not background-colored).
pub fn raster_compare(
    document: &VectorDocument,
    buffer: &PixelBuffer,
    config: &VectorizeConfig,
) -> Result<RasterReport, VectorizeError> {
    let pixmap = render(document)?;
    if pixmap.width() != buffer.width() || pixmap.height() != buffer.height() {
        return Err(VectorizeError::InvalidDimensions {
            width: document.width,
            height: document.height,
            len: buffer.len() * 4,
        });
    }
    let background = detect_background(buffer, config);

    let mut overlap_px = 0u64;
    let mut rendered_px = 0u64;
    let mut source_px = 0u64;
    for (i, rendered) in pixmap.pixels().iter().enumerate() {
        let (color, alpha) = buffer.pixel(i);
        let in_source =
            alpha > config.opacity_threshold && color.distance(&background) >= config.background_distance;
        let in_render = rendered.alpha() > 0;
        source_px += in_source as u64;
        rendered_px += in_render as u64;
        overlap_px += (in_source && in_render) as u64;
    }

    let union = source_px + rendered_px - overlap_px;
    let iou = if union == 0 { 1.0 } else { overlap_px as f64 / union as f64 };
    Ok(RasterReport {
        iou,
        overlap_px,
        rendered_px,
        source_px,
    })
}
