//! RGB color samples, distance and quantization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VectorizeError;

/// An opaque RGB color. Alpha is handled by the caller.
///
/// Serializes as its SVG fill text, `rgb(r, g, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Euclidean distance in RGB space.
    pub fn distance(&self, other: &Rgb) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Round each channel to the nearest multiple of `step`, clamped to 0..=255.
    pub fn quantize(&self, step: u8) -> Rgb {
        if step <= 1 {
            return *self;
        }
        let q = |v: u8| -> u8 {
            let step = step as f64;
            ((v as f64 / step).round() * step).clamp(0.0, 255.0) as u8
        };
        Rgb::new(q(self.r), q(self.g), q(self.b))
    }

    /// Raw `r,g,b` form used when logging.
    pub fn key(&self) -> String {
        format!("{},{},{}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = VectorizeError;

    /// Parse `rgb(r, g, b)`; whitespace after commas is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VectorizeError::InvalidColor(s.to_string());
        let inner = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let mut channels = inner.split(',').map(|c| c.trim().parse::<u8>());
        let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) =
            (channels.next(), channels.next(), channels.next(), channels.next())
        else {
            return Err(invalid());
        };
        Ok(Rgb::new(r, g, b))
    }
}

impl TryFrom<String> for Rgb {
    type Error = VectorizeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_rounds_to_nearest_step() {
        assert_eq!(Rgb::new(7, 8, 22).quantize(15), Rgb::new(0, 15, 15));
        assert_eq!(Rgb::new(255, 250, 247).quantize(15), Rgb::new(255, 255, 240));
        assert_eq!(Rgb::new(12, 34, 56).quantize(0), Rgb::new(12, 34, 56));
    }

    #[test]
    fn quantize_clamps_to_channel_range() {
        // 250 / 20 = 12.5 rounds to 13 -> 260, clamped.
        assert_eq!(Rgb::new(250, 0, 0).quantize(20), Rgb::new(255, 0, 0));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(3, 4, 0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn fill_text_parses_back() {
        let c = Rgb::new(255, 0, 30);
        assert_eq!(c.to_string(), "rgb(255, 0, 30)");
        assert_eq!("rgb(255,0,30)".parse::<Rgb>().unwrap(), c);
        assert!("rgb(1, 2)".parse::<Rgb>().is_err());
        assert!("rgb(1, 2, 3, 4)".parse::<Rgb>().is_err());
        assert!("#ff0000".parse::<Rgb>().is_err());
        assert!("rgb(256, 0, 0)".parse::<Rgb>().is_err());
    }
}
