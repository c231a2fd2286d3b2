use serde::{Deserialize, Serialize};

/// All vectorization parameters in one struct.
/// Serializable so presets can be saved and loaded as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizeConfig {
    // -- Color stage --
    /// Pixels with alpha at or below this value are transparent and ignored.
    pub opacity_threshold: u8,
    /// Upper bound on the number of pixels sampled for background detection.
    pub background_samples: usize,
    /// Pixels closer than this (Euclidean RGB) to the background are dropped.
    pub background_distance: f64,
    /// Channel quantization step. 0 or 1 = no quantization.
    pub quantize_step: u8,

    // -- Component stage --
    /// Color groups with fewer pixels than this are skipped entirely.
    pub min_group_size: usize,
    /// Components with fewer pixels than this produce no shape.
    pub min_component_size: usize,

    // -- Shape stage --
    /// Bounding-box coverage strictly above this emits a rectangle.
    pub rect_coverage: f64,

    // -- Post-processing --
    /// Merge fills closer than this distance. 0 = no merging.
    pub merge_tolerance: f64,
}

impl Default for VectorizeConfig {
    fn default() -> Self {
        Self {
            opacity_threshold: 200,
            background_samples: 1000,
            background_distance: 30.0,
            quantize_step: 15,
            min_group_size: 5,
            min_component_size: 3,
            rect_coverage: 0.7,
            merge_tolerance: 0.0,
        }
    }
}
