//! Convex hull by Graham scan.
//!
//! Polar angles are compared with exact integer cross products rather
//! than `atan2`, so equal angles are detected exactly. Points on the same
//! ray from the pivot are visited nearest first; combined with popping on
//! non-positive turns this drops every collinear point.

use std::cmp::Ordering;

type Pt = (u32, u32);

/// Z component of (a - o) x (b - o). Positive when o -> a -> b turns
/// counter-clockwise in a y-up frame.
fn cross(o: Pt, a: Pt, b: Pt) -> i64 {
    let (ox, oy) = (o.0 as i64, o.1 as i64);
    (a.0 as i64 - ox) * (b.1 as i64 - oy) - (a.1 as i64 - oy) * (b.0 as i64 - ox)
}

fn dist2(a: Pt, b: Pt) -> i64 {
    let dx = a.0 as i64 - b.0 as i64;
    let dy = a.1 as i64 - b.1 as i64;
    dx * dx + dy * dy
}

/// Convex hull of `points`, starting at the point with the smallest y
/// (ties: smallest x) and sweeping by increasing polar angle.
///
/// Fewer than 3 input points are returned unchanged. Degenerate inputs
/// (all points collinear) yield fewer than 3 vertices.
pub fn convex_hull(points: &[Pt]) -> Vec<Pt> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut pivot = points[0];
    for &p in points {
        if p.1 < pivot.1 || (p.1 == pivot.1 && p.0 < pivot.0) {
            pivot = p;
        }
    }

    // Every other point has y >= pivot.y, and x > pivot.x when y is equal,
    // so all angles lie in [0, pi) and the cross product is a total order.
    let mut sorted: Vec<Pt> = points.iter().copied().filter(|&p| p != pivot).collect();
    sorted.sort_by(|&a, &b| match cross(pivot, a, b).cmp(&0) {
        Ordering::Greater => Ordering::Less,
        Ordering::Less => Ordering::Greater,
        Ordering::Equal => dist2(pivot, a).cmp(&dist2(pivot, b)),
    });

    let mut hull: Vec<Pt> = vec![pivot];
    for p in sorted {
        while hull.len() > 1 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_with_interior_points() {
        let mut pts = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                pts.push((x, y));
            }
        }
        let hull = convex_hull(&pts);
        assert_eq!(hull, vec![(0, 0), (3, 0), (3, 3), (0, 3)]);
    }

    #[test]
    fn collinear_points_collapse() {
        let pts: Vec<Pt> = (0..5).map(|i| (i, i)).collect();
        let hull = convex_hull(&pts);
        assert_eq!(hull, vec![(0, 0), (4, 4)]);
    }

    #[test]
    fn triangle_drops_edge_points() {
        // Right triangle with points along every edge.
        let pts = vec![(2, 2), (0, 0), (1, 0), (2, 0), (1, 1), (2, 1)];
        let hull = convex_hull(&pts);
        assert_eq!(hull, vec![(0, 0), (2, 0), (2, 2)]);
    }

    #[test]
    fn hull_encloses_all_points() {
        let pts = vec![(5, 1), (2, 3), (8, 4), (4, 4), (6, 9), (1, 7), (3, 5), (7, 2)];
        let hull = convex_hull(&pts);
        assert!(hull.len() >= 3);
        let n = hull.len();
        for &p in &pts {
            for i in 0..n {
                assert!(cross(hull[i], hull[(i + 1) % n], p) >= 0, "{p:?} outside hull");
            }
        }
        for v in &hull {
            assert!(pts.contains(v));
        }
    }

    #[test]
    fn short_input_passes_through() {
        assert_eq!(convex_hull(&[(1, 1), (0, 0)]), vec![(1, 1), (0, 0)]);
    }
}
