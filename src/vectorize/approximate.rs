//! Per-component shape approximation.
//!
//! Dense, box-like components become rectangles; everything else becomes
//! the convex hull of its pixels. Components whose hull degenerates to a
//! line or point produce nothing.

use super::hull::convex_hull;
use crate::color::Rgb;
use crate::config::VectorizeConfig;
use crate::document::Shape;

/// Inclusive pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Bounds {
    pub fn of(pixels: &[(u32, u32)]) -> Option<Bounds> {
        let (&(x0, y0), rest) = pixels.split_first()?;
        let mut b = Bounds {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for &(x, y) in rest {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

/// Fraction of the bounding box occupied by the component, in (0, 1]
/// for any non-empty set of distinct pixels.
pub fn coverage(pixels: &[(u32, u32)], bounds: &Bounds) -> f64 {
    pixels.len() as f64 / bounds.area() as f64
}

/// Approximate one component with a rectangle or convex polygon.
pub fn approximate(component: &[(u32, u32)], fill: Rgb, config: &VectorizeConfig) -> Option<Shape> {
    if component.len() < config.min_component_size.max(1) {
        return None;
    }

    let bounds = Bounds::of(component)?;
    if coverage(component, &bounds) > config.rect_coverage {
        return Some(Shape::Rect {
            x: bounds.min_x,
            y: bounds.min_y,
            w: bounds.width(),
            h: bounds.height(),
            fill,
        });
    }

    let hull = convex_hull(component);
    if hull.len() < 3 {
        return None;
    }
    Some(Shape::Polygon { points: hull, fill })
}
