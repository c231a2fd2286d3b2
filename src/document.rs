//! Vector output model: flat, fill-only shapes on a fixed canvas.

use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// A filled shape. No stroke, no transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Axis-aligned rectangle covering pixels `x..x+w` by `y..y+h`.
    Rect {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        fill: Rgb,
    },
    /// Closed convex outline through pixel coordinates, at least 3 vertices.
    Polygon { points: Vec<(u32, u32)>, fill: Rgb },
}

impl Shape {
    pub fn fill(&self) -> Rgb {
        match self {
            Shape::Rect { fill, .. } | Shape::Polygon { fill, .. } => *fill,
        }
    }

    pub fn set_fill(&mut self, color: Rgb) {
        match self {
            Shape::Rect { fill, .. } | Shape::Polygon { fill, .. } => *fill = color,
        }
    }

    /// Outline as a closed kurbo path in pixel coordinates (y-down).
    pub fn to_bezpath(&self) -> BezPath {
        match self {
            Shape::Rect { x, y, w, h, .. } => {
                let rect = kurbo::Rect::new(
                    *x as f64,
                    *y as f64,
                    (*x + *w) as f64,
                    (*y + *h) as f64,
                );
                kurbo::Shape::to_path(&rect, 0.1)
            }
            Shape::Polygon { points, .. } => {
                let mut path = BezPath::new();
                let mut iter = points.iter().map(|&(x, y)| Point::new(x as f64, y as f64));
                if let Some(first) = iter.next() {
                    path.move_to(first);
                    for p in iter {
                        path.line_to(p);
                    }
                    path.close_path();
                }
                path
            }
        }
    }
}

/// A flat, ordered list of shapes on a `width` x `height` canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorDocument {
    pub width: u32,
    pub height: u32,
    pub shapes: Vec<Shape>,
}

impl VectorDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Count of (rectangles, polygons).
    pub fn shape_counts(&self) -> (usize, usize) {
        let rects = self
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Rect { .. }))
            .count();
        (rects, self.shapes.len() - rects)
    }
}
