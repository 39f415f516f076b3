use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Resamples the image onto the target cell grid with a Catmull-Rom
/// (bicubic-class) kernel. Identity when the dimensions already match;
/// callers rely on the skip to keep unscaled input bit-exact.
pub fn resample(image: DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.dimensions() == (width, height) {
        return image;
    }
    image.resize_exact(width, height, FilterType::CatmullRom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_dimensions_are_untouched() {
        let rgb = image::RgbImage::from_pixel(3, 2, image::Rgb([7, 8, 9]));
        let image = DynamicImage::ImageRgb8(rgb);
        let out = resample(image.clone(), 3, 2);
        assert_eq!(out.to_rgb8().as_raw(), image.to_rgb8().as_raw());
    }

    #[test]
    fn resample_hits_target_dimensions() {
        let rgb = image::RgbImage::from_pixel(16, 16, image::Rgb([100, 100, 100]));
        let out = resample(DynamicImage::ImageRgb8(rgb), 4, 2);
        assert_eq!(out.dimensions(), (4, 2));
    }
}
