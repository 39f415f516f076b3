use std::path::Path;

use image::DynamicImage;

use crate::pixel::{Pixel, PixelGrid};

pub fn open_path<P: AsRef<Path>>(path: P) -> Result<DynamicImage, image::ImageError> {
    image::open(path)
}

pub fn open_bytes(bytes: &[u8]) -> Result<DynamicImage, image::ImageError> {
    image::load_from_memory(bytes)
}

/// Flattens a decoded image into an RGB pixel grid, dropping alpha.
pub fn to_pixel_grid(image: &DynamicImage) -> PixelGrid {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb.pixels().map(|pixel| Pixel::from(pixel.0)).collect();
    PixelGrid::new(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_discarded() {
        let rgba = image::RgbaImage::from_pixel(2, 1, image::Rgba([10, 20, 30, 128]));
        let grid = to_pixel_grid(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.pixels()[0], Pixel::new(10, 20, 30));
    }
}
