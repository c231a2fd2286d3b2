//! Background detection and color grouping.
//!
//! The most frequent opaque color in an evenly spaced sample is taken as
//! the background. Every other opaque pixel is quantized and appended to
//! the group for its quantized color.

use std::collections::HashMap;

use crate::bitmap::PixelBuffer;
use crate::color::Rgb;
use crate::config::VectorizeConfig;

/// Pixels sharing one quantized color, in row-major scan order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGroup {
    pub color: Rgb,
    pub pixels: Vec<(u32, u32)>,
}

/// Output of the color stage.
#[derive(Debug, Clone)]
pub struct Classification {
    pub background: Rgb,
    /// Groups in first-encounter order of their quantized color.
    pub groups: Vec<ColorGroup>,
}

/// Most frequent exact color among sampled opaque pixels.
///
/// Samples every `stride`-th pixel where
/// `stride = total / min(samples, total)`. Ties go to the color seen
/// first. Returns white when no sampled pixel is opaque.
pub fn detect_background(buffer: &PixelBuffer, config: &VectorizeConfig) -> Rgb {
    let total = buffer.len();
    let sample_size = config.background_samples.min(total).max(1);
    let stride = (total / sample_size).max(1);

    let mut index: HashMap<Rgb, usize> = HashMap::new();
    let mut counts: Vec<(Rgb, usize)> = Vec::new();
    for i in (0..total).step_by(stride) {
        let (color, alpha) = buffer.pixel(i);
        if alpha <= config.opacity_threshold {
            continue;
        }
        let slot = *index.entry(color).or_insert_with(|| {
            counts.push((color, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    let mut background = Rgb::WHITE;
    let mut max_count = 0;
    for &(color, count) in &counts {
        if count > max_count {
            max_count = count;
            background = color;
        }
    }
    background
}

/// Detect the background and group all remaining opaque pixels by
/// quantized color.
pub fn classify(buffer: &PixelBuffer, config: &VectorizeConfig) -> Classification {
    let background = detect_background(buffer, config);

    let mut index: HashMap<Rgb, usize> = HashMap::new();
    let mut groups: Vec<ColorGroup> = Vec::new();
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let (color, alpha) = buffer.get(x, y);
            if alpha <= config.opacity_threshold {
                continue;
            }
            if color.distance(&background) < config.background_distance {
                continue;
            }
            let key = color.quantize(config.quantize_step);
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(ColorGroup {
                    color: key,
                    pixels: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].pixels.push((x, y));
        }
    }

    Classification { background, groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_from(pixels: &[[u8; 4]]) -> Vec<u8> {
        pixels.iter().flatten().copied().collect()
    }

    #[test]
    fn background_defaults_to_white_when_transparent() {
        let data = buffer_from(&[[0, 0, 0, 0]; 9]);
        let buf = PixelBuffer::new(&data, 3, 3).unwrap();
        assert_eq!(detect_background(&buf, &VectorizeConfig::default()), Rgb::WHITE);
    }

    #[test]
    fn background_is_most_frequent_opaque_color() {
        let mut px = vec![[0, 0, 255, 255]; 6];
        px.extend([[255, 0, 0, 255]; 3]);
        // Transparent pixels don't vote, whatever their RGB.
        px.extend([[255, 0, 0, 100]; 7]);
        let data = buffer_from(&px);
        let buf = PixelBuffer::new(&data, 4, 4).unwrap();
        assert_eq!(detect_background(&buf, &VectorizeConfig::default()), Rgb::new(0, 0, 255));
    }

    #[test]
    fn background_tie_goes_to_first_seen() {
        let data = buffer_from(&[[9, 9, 9, 255], [1, 1, 1, 255], [1, 1, 1, 255], [9, 9, 9, 255]]);
        let buf = PixelBuffer::new(&data, 2, 2).unwrap();
        assert_eq!(detect_background(&buf, &VectorizeConfig::default()), Rgb::new(9, 9, 9));
    }

    #[test]
    fn background_sampling_uses_stride() {
        // 2000 pixels, 1000 samples: stride 2 only sees even indices.
        // Light is the overall majority (1200) but only 200 of them are sampled.
        let mut px = Vec::with_capacity(2000);
        for i in 0..2000 {
            let light = i % 2 == 1 || i % 10 == 0;
            px.push(if light { [200, 200, 200, 255] } else { [10, 10, 10, 255] });
        }
        let data = buffer_from(&px);
        let buf = PixelBuffer::new(&data, 100, 20).unwrap();
        assert_eq!(detect_background(&buf, &VectorizeConfig::default()), Rgb::new(10, 10, 10));
    }

    #[test]
    fn groups_skip_background_and_transparent() {
        let w = [255, 255, 255, 255];
        let near_w = [240, 245, 250, 255];
        let red = [250, 3, 4, 255];
        let ghost = [0, 0, 0, 50];
        let data = buffer_from(&[w, w, w, near_w, red, ghost, w, red, w]);
        let buf = PixelBuffer::new(&data, 3, 3).unwrap();
        let c = classify(&buf, &VectorizeConfig::default());
        assert_eq!(c.background, Rgb::WHITE);
        assert_eq!(c.groups.len(), 1);
        assert_eq!(c.groups[0].color, Rgb::new(255, 0, 0));
        assert_eq!(c.groups[0].pixels, vec![(1, 1), (1, 2)]);
    }

    #[test]
    fn groups_keep_first_encounter_order() {
        let w = [255, 255, 255, 255];
        let blue = [0, 0, 250, 255];
        let green = [0, 128, 0, 255];
        let data = buffer_from(&[w, w, w, w, blue, w, green, w, blue, w, w, w]);
        let buf = PixelBuffer::new(&data, 4, 3).unwrap();
        let c = classify(&buf, &VectorizeConfig::default());
        let colors: Vec<Rgb> = c.groups.iter().map(|g| g.color).collect();
        assert_eq!(colors, vec![Rgb::new(0, 0, 255), Rgb::new(0, 135, 0)]);
        assert_eq!(c.groups[0].pixels, vec![(0, 1), (0, 2)]);
        assert_eq!(c.groups[1].pixels, vec![(2, 1)]);
    }
}
