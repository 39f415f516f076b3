use log::debug;

use crate::pixel::{Pixel, PixelGrid};

/// Applies contrast, then brightness. A factor of exactly 1.0 skips that
/// axis entirely, leaving the input grid untouched (guaranteed identity,
/// no reallocation).
pub fn apply(grid: PixelGrid, contrast: f32, brightness: f32) -> PixelGrid {
    let mut grid = grid;
    if contrast != 1.0 {
        debug!("adjusting contrast by {}", contrast);
        grid = adjust_contrast(&grid, contrast);
    }
    if brightness != 1.0 {
        debug!("adjusting brightness by {}", brightness);
        grid = adjust_brightness(&grid, brightness);
    }
    grid
}

/// Scales channel distance from the grid's mean gray point: 1.0 keeps the
/// image, 0.0 collapses it to uniform gray.
pub fn adjust_contrast(grid: &PixelGrid, factor: f32) -> PixelGrid {
    let mean = mean_luminance(grid);
    grid.map(|pixel| {
        Pixel::new(
            clamp_channel(mean + (f32::from(pixel.r) - mean) * factor),
            clamp_channel(mean + (f32::from(pixel.g) - mean) * factor),
            clamp_channel(mean + (f32::from(pixel.b) - mean) * factor),
        )
    })
}

/// Scales every channel toward black (factor < 1.0) or white (factor > 1.0).
pub fn adjust_brightness(grid: &PixelGrid, factor: f32) -> PixelGrid {
    grid.map(|pixel| {
        Pixel::new(
            clamp_channel(f32::from(pixel.r) * factor),
            clamp_channel(f32::from(pixel.g) * factor),
            clamp_channel(f32::from(pixel.b) * factor),
        )
    })
}

/// Grid-wide mean gray level, ITU-R BT.601 weights, rounded to an integer
/// gray point so contrast pivots on a representable channel value.
fn mean_luminance(grid: &PixelGrid) -> f32 {
    let sum: f64 = grid
        .pixels()
        .iter()
        .map(|pixel| {
            (299 * u32::from(pixel.r) + 587 * u32::from(pixel.g) + 114 * u32::from(pixel.b)) as f64
                / 1000.0
        })
        .sum();
    ((sum / grid.pixels().len() as f64) + 0.5).floor() as f32
}

fn clamp_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
