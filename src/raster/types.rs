use image::{ImageBuffer, Rgb, RgbImage};

/// A decoded raster image in fixed RGB8 representation
///
/// This is a simple wrapper around an RGB image buffer. Alpha channels are
/// dropped at decode time; the composition pipeline only ever sees
/// 3-channel data. A `Raster` is never mutated after construction -
/// normalization and composition always allocate new instances.
#[derive(Clone, Debug)]
pub struct Raster {
    buffer: RgbImage,
}

impl Raster {
    /// Create a new raster from an RGB image buffer
    pub fn new(buffer: RgbImage) -> Self {
        Self { buffer }
    }

    /// Create a new raster with the given dimensions filled with black
    pub fn new_black(width: u32, height: u32) -> Self {
        let buffer = ImageBuffer::new(width, height);
        Self { buffer }
    }

    /// Create a new raster with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let buffer = ImageBuffer::from_fn(width, height, |_, _| Rgb(color));
        Self { buffer }
    }

    /// Get the width of the raster
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the height of the raster
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get the dimensions as a (width, height) pair
    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Get a pixel at the given coordinates (returns RGB array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let pixel = self.buffer.get_pixel(x, y);
        [pixel[0], pixel[1], pixel[2]]
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Convert the raster to raw RGB bytes
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.buffer.as_raw().clone()
    }

    /// Create a raster from raw RGB bytes
    pub fn from_rgb_bytes(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        ImageBuffer::from_raw(width, height, data).map(|buffer| Self { buffer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_filled_dimensions_and_color() {
        let raster = Raster::new_filled(4, 3, [10, 20, 30]);
        assert_eq!(raster.dimensions(), (4, 3));
        assert_eq!(raster.get_pixel(0, 0), [10, 20, 30]);
        assert_eq!(raster.get_pixel(3, 2), [10, 20, 30]);
    }

    #[test]
    fn test_rgb_bytes_roundtrip_length() {
        let raster = Raster::new_black(2, 2);
        let bytes = raster.to_rgb_bytes();
        assert_eq!(bytes.len(), 2 * 2 * 3);

        let rebuilt = Raster::from_rgb_bytes(2, 2, bytes).unwrap();
        assert_eq!(rebuilt.dimensions(), (2, 2));
    }

    #[test]
    fn test_from_rgb_bytes_rejects_wrong_length() {
        assert!(Raster::from_rgb_bytes(2, 2, vec![0u8; 5]).is_none());
    }
}
