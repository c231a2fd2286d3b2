use std::fmt::Write as _;
use std::path::Path;

use crate::document::{Shape, VectorDocument};
use crate::error::VectorizeError;

/// Serialize a document as standalone SVG-XML.
///
/// Rectangles become `<rect>`, polygons become closed `<path>` elements.
/// Only `fill` is set; there is no stroke and no transform.
pub fn to_svg(document: &VectorDocument) -> String {
    let mut svg = String::new();
    let (w, h) = (document.width, document.height);
    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    for shape in &document.shapes {
        match shape {
            Shape::Rect { x, y, w, h, fill } => {
                let _ = writeln!(
                    svg,
                    r#"  <rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{fill}"/>"#
                );
            }
            Shape::Polygon { points, fill } => {
                let d = path_data(points);
                let _ = writeln!(svg, r#"  <path d="{d}" fill="{fill}" stroke="none"/>"#);
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// `M x y L x y ... Z` outline for a polygon.
fn path_data(points: &[(u32, u32)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd} {x} {y} ");
    }
    d.push('Z');
    d
}

/// Write a document to an `.svg` file.
pub fn write_svg(document: &VectorDocument, path: &Path) -> Result<(), VectorizeError> {
    std::fs::write(path, to_svg(document))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn empty_document_has_canvas_only() {
        let svg = to_svg(&VectorDocument::new(4, 3));
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="3" viewBox="0 0 4 3">"#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.lines().count(), 2);
    }

    #[test]
    fn shapes_are_fill_only() {
        let doc = VectorDocument {
            width: 10,
            height: 10,
            shapes: vec![
                Shape::Rect { x: 1, y: 2, w: 3, h: 4, fill: Rgb::new(255, 0, 0) },
                Shape::Polygon { points: vec![(0, 0), (5, 0), (5, 5)], fill: Rgb::new(0, 0, 255) },
            ],
        };
        let svg = to_svg(&doc);
        assert!(svg.contains(r#"<rect x="1" y="2" width="3" height="4" fill="rgb(255, 0, 0)"/>"#));
        assert!(svg.contains(r#"fill="rgb(0, 0, 255)" stroke="none""#));
        assert!(svg.contains(r#"d="M 0 0 L 5 0 L 5 5 Z""#));
        assert!(!svg.contains("transform"));
        assert!(!svg.contains("stroke-width"));
    }
}
