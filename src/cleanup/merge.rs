//! Similar-fill merging.
//!
//! Distinct fills are visited in first-appearance order. Each fill is
//! compared against the representatives kept so far and recolored to the
//! first one closer than the tolerance; otherwise it becomes a new
//! representative. The result depends on visiting order.

use std::collections::HashMap;

use crate::color::Rgb;
use crate::document::VectorDocument;

/// Recolor shapes whose fill is within `tolerance` of an earlier fill.
///
/// Returns the number of distinct fills that were replaced.
pub fn merge_similar_fills(document: &mut VectorDocument, tolerance: f64) -> usize {
    let mut representatives: Vec<Rgb> = Vec::new();
    let mut mapping: HashMap<Rgb, Rgb> = HashMap::new();

    for shape in &document.shapes {
        let fill = shape.fill();
        if mapping.contains_key(&fill) {
            continue;
        }
        let target = representatives
            .iter()
            .copied()
            .find(|rep| fill.distance(rep) < tolerance)
            .unwrap_or_else(|| {
                representatives.push(fill);
                fill
            });
        mapping.insert(fill, target);
    }

    for shape in &mut document.shapes {
        if let Some(&target) = mapping.get(&shape.fill()) {
            shape.set_fill(target);
        }
    }

    mapping.iter().filter(|(from, to)| from != to).count()
}
