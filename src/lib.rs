//! img2svg: raster image → flat SVG shapes.
//!
//! Segments an image into quantized color regions, splits each region
//! into 8-connected components and approximates every component with a
//! rectangle or a convex polygon. Output is deterministic for a given
//! input and configuration.
//!
//! # Example
//!
//! ```no_run
//! use img2svg::{vectorize_image, VectorizeConfig};
//! use std::path::Path;
//!
//! let config = VectorizeConfig::default();
//! let document = vectorize_image(Path::new("diagram.png"), &config)?;
//! let svg = img2svg::output::svg::to_svg(&document);
//! # Ok::<(), img2svg::VectorizeError>(())
//! ```

#![forbid(unsafe_code)]

mod bitmap;
mod color;
mod config;
mod document;

pub mod cleanup;
pub mod error;
pub mod output;
pub mod render;
pub mod tracer;
pub mod vectorize;

// Re-export kurbo so downstream users get the same version
// returned by `Shape::to_bezpath`.
pub use kurbo;

pub use bitmap::{load_rgba, PixelBuffer};
pub use color::Rgb;
pub use config::VectorizeConfig;
pub use document::{Shape, VectorDocument};
pub use error::VectorizeError;
pub use vectorize::TraceStats;

use std::path::Path;
use std::time::Instant;

/// Full pipeline on raw row-major RGBA bytes.
///
/// Fails with [`VectorizeError::InvalidDimensions`] if the buffer does not
/// hold exactly `width * height` pixels. A document with no shapes is a
/// valid result (nothing but background or transparency).
pub fn vectorize(
    pixels: &[u8],
    width: u32,
    height: u32,
    config: &VectorizeConfig,
) -> Result<VectorDocument, VectorizeError> {
    let buffer = PixelBuffer::new(pixels, width, height)?;
    vectorize_buffer(&buffer, config)
}

/// Full pipeline on an already validated buffer.
pub fn vectorize_buffer(
    buffer: &PixelBuffer,
    config: &VectorizeConfig,
) -> Result<VectorDocument, VectorizeError> {
    vectorize_with_stats(buffer, config).map(|(document, _)| document)
}

/// Like [`vectorize_buffer`], also returning per-stage counts and timings.
pub fn vectorize_with_stats(
    buffer: &PixelBuffer,
    config: &VectorizeConfig,
) -> Result<(VectorDocument, TraceStats), VectorizeError> {
    let t_start = Instant::now();

    let (mut document, stats) = vectorize::trace(buffer, config);
    cleanup::process(&mut document, config);

    let (rects, polygons) = document.shape_counts();
    log::info!(
        "{}x{} px → {} shapes ({} rects, {} polygons) in {}ms",
        buffer.width(),
        buffer.height(),
        document.shapes.len(),
        rects,
        polygons,
        t_start.elapsed().as_millis(),
    );
    Ok((document, stats))
}

/// Convenience: load an image file and vectorize it.
pub fn vectorize_image(path: &Path, config: &VectorizeConfig) -> Result<VectorDocument, VectorizeError> {
    let img = load_rgba(path)?;
    let buffer = PixelBuffer::from_image(&img)?;
    vectorize_buffer(&buffer, config)
}
