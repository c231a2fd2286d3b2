//! Vectorization pipeline: pixel buffer → flat vector shapes.
//!
//! 1. Background detection and color grouping (quantized palette)
//! 2. 8-connected components per color group
//! 3. Rectangle or convex-hull polygon per component
//! 4. Assembly into one ordered document

pub mod approximate;
pub mod classify;
pub mod components;
pub mod hull;

use std::time::Instant;

use crate::bitmap::PixelBuffer;
use crate::color::Rgb;
use crate::config::VectorizeConfig;
use crate::document::{Shape, VectorDocument};

pub use classify::{Classification, ColorGroup};

/// Turns one connected component into at most one shape.
///
/// `assemble` is generic over this so callers can substitute their own
/// approximation; [`approximate::approximate`] is the default.
pub trait Approximator {
    fn approximate(&self, component: &[(u32, u32)], fill: Rgb) -> Option<Shape>;
}

/// Rectangle-or-hull approximation driven by a [`VectorizeConfig`].
#[derive(Debug, Clone, Copy)]
pub struct HullApproximator<'a> {
    pub config: &'a VectorizeConfig,
}

impl Approximator for HullApproximator<'_> {
    fn approximate(&self, component: &[(u32, u32)], fill: Rgb) -> Option<Shape> {
        approximate::approximate(component, fill, self.config)
    }
}

/// Collect shapes from every color group, in group order then component
/// discovery order. Groups smaller than `min_group_size` are skipped.
pub fn assemble<A: Approximator>(
    width: u32,
    height: u32,
    groups: &[ColorGroup],
    min_group_size: usize,
    approximator: &A,
) -> VectorDocument {
    let mut document = VectorDocument::new(width, height);
    let mut finder = components::ComponentFinder::new(width, height);

    for group in groups {
        if group.pixels.len() < min_group_size {
            log::trace!("skip group {} ({} px)", group.color.key(), group.pixels.len());
            continue;
        }
        let components = finder.find(&group.pixels);
        let before = document.shapes.len();
        document.shapes.extend(
            components
                .iter()
                .filter_map(|component| approximator.approximate(component, group.color)),
        );
        log::trace!(
            "group {}: {} px, {} components, {} shapes",
            group.color.key(),
            group.pixels.len(),
            components.len(),
            document.shapes.len() - before,
        );
    }

    document
}

/// Per-stage counts and timings from one [`trace`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStats {
    pub background: Rgb,
    pub groups: usize,
    pub classify_ms: u128,
    pub rects: usize,
    pub polygons: usize,
    pub shapes_ms: u128,
}

/// Run the full pipeline on a validated buffer.
pub fn trace(buffer: &PixelBuffer, config: &VectorizeConfig) -> (VectorDocument, TraceStats) {
    let t_classify = Instant::now();
    let classification = classify::classify(buffer, config);
    let classify_ms = t_classify.elapsed().as_millis();
    log::debug!(
        "classify: background {} · {} color groups ({}ms)",
        classification.background.key(),
        classification.groups.len(),
        classify_ms,
    );

    let t_shapes = Instant::now();
    let approximator = HullApproximator { config };
    let document = assemble(
        buffer.width(),
        buffer.height(),
        &classification.groups,
        config.min_group_size,
        &approximator,
    );
    let shapes_ms = t_shapes.elapsed().as_millis();
    let (rects, polygons) = document.shape_counts();
    log::debug!("shapes: {} rects + {} polygons ({}ms)", rects, polygons, shapes_ms);

    let stats = TraceStats {
        background: classification.background,
        groups: classification.groups.len(),
        classify_ms,
        rects,
        polygons,
        shapes_ms,
    };
    (document, stats)
}
