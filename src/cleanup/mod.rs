//! Optional post-processing over an assembled document.
//!
//! Cosmetic only: none of these steps are needed for a valid document.

mod merge;

pub use merge::merge_similar_fills;

use crate::config::VectorizeConfig;
use crate::document::VectorDocument;

/// Apply the post-processing steps enabled in `config`.
pub fn process(document: &mut VectorDocument, config: &VectorizeConfig) {
    if config.merge_tolerance > 0.0 {
        let merged = merge_similar_fills(document, config.merge_tolerance);
        log::debug!("merge: {} fills recolored (tolerance {})", merged, config.merge_tolerance);
    }
}
