use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::color::Rgb;
use crate::error::VectorizeError;

/// A validated, borrowed view over row-major RGBA8 pixel data.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap raw RGBA bytes. Fails if either dimension is zero or the
    /// length is not exactly `width * height * 4`.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, VectorizeError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        match expected {
            Some(n) if width > 0 && height > 0 && n == data.len() => Ok(Self { data, width, height }),
            _ => Err(VectorizeError::InvalidDimensions {
                width,
                height,
                len: data.len(),
            }),
        }
    }

    /// Borrow the pixels of a decoded `image` buffer.
    pub fn from_image(img: &'a RgbaImage) -> Result<Self, VectorizeError> {
        Self::new(img.as_raw(), img.width(), img.height())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.data.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// RGB and alpha of the pixel at linear index `i` (row-major).
    pub fn pixel(&self, i: usize) -> (Rgb, u8) {
        let p = &self.data[i * 4..i * 4 + 4];
        (Rgb::new(p[0], p[1], p[2]), p[3])
    }

    /// RGB and alpha of the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> (Rgb, u8) {
        self.pixel(y as usize * self.width as usize + x as usize)
    }
}

/// Load any image format supported by the `image` crate as RGBA8.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, VectorizeError> {
    let img = ImageReader::open(path)
        .map_err(|e| VectorizeError::ImageLoad(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| VectorizeError::ImageLoad(e.to_string()))?
        .decode()
        .map_err(|e| VectorizeError::ImageLoad(e.to_string()))?
        .into_rgba8();
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_length_mismatch() {
        let data = vec![0u8; 15];
        assert!(matches!(
            PixelBuffer::new(&data, 2, 2),
            Err(VectorizeError::InvalidDimensions { width: 2, height: 2, len: 15 })
        ));
    }

    #[test]
    fn rejects_zero_dimensions() {
        let data: Vec<u8> = Vec::new();
        assert!(PixelBuffer::new(&data, 0, 4).is_err());
        assert!(PixelBuffer::new(&data, 4, 0).is_err());
    }

    #[test]
    fn reads_row_major() {
        let mut data = vec![0u8; 2 * 2 * 4];
        // (1, 1) is the last pixel.
        data[12..16].copy_from_slice(&[10, 20, 30, 255]);
        let buf = PixelBuffer::new(&data, 2, 2).unwrap();
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.get(1, 1), (Rgb::new(10, 20, 30), 255));
        assert_eq!(buf.get(0, 1), (Rgb::new(0, 0, 0), 0));
    }

    #[test]
    fn wraps_image_buffer() {
        let img = RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]));
        let buf = PixelBuffer::from_image(&img).unwrap();
        assert_eq!((buf.width(), buf.height()), (3, 2));
        assert_eq!(buf.get(2, 1), (Rgb::new(1, 2, 3), 255));
    }
}
