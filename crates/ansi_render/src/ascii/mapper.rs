use crate::pixel::{Pixel, PixelGrid};
use crate::RenderConfig;

/// SGR parameter selecting the foreground for the true-color escape.
const SGR_FOREGROUND: u8 = 38;
/// SGR parameter selecting the background for the true-color escape.
const SGR_BACKGROUND: u8 = 48;
/// Full attribute reset, appended once per rendered line.
const SGR_RESET: &str = "\x1b[0m";

/// Perceptual luminance, ITU-R BT.709 weights.
pub fn luminance(pixel: Pixel) -> f32 {
    0.2126 * f32::from(pixel.r) + 0.7152 * f32::from(pixel.g) + 0.0722 * f32::from(pixel.b)
}

/// Quantizes a luminance value in [0, 255] to a glyph index.
///
/// `floor((luminance / 255) * levels)` reaches `levels` when the input is
/// exactly 255; the result is clamped to the last valid index so a pure
/// white pixel selects the brightest glyph instead of reading past the
/// table.
pub fn glyph_index(luminance: f32, levels: usize) -> usize {
    let index = ((luminance / 255.0) * levels as f32) as usize;
    index.min(levels - 1)
}

/// Builds one SGR true-color escape: `\x1b[{38|48};2;{r};{g};{b}m`.
pub fn escape_code(r: u8, g: u8, b: u8, background: bool) -> String {
    let target = if background { SGR_BACKGROUND } else { SGR_FOREGROUND };
    format!("\x1b[{};2;{};{};{}m", target, r, g, b)
}

/// Renders the grid into `height` lines of `width` colored cells each.
///
/// Cells are emitted in row-major order as an escape immediately followed
/// by the selected glyph; each completed line is terminated by a reset so
/// rows can be printed independently.
pub fn render_lines(grid: &PixelGrid, config: &RenderConfig) -> Vec<String> {
    let width = grid.width() as usize;
    let levels = config.glyph_table.len();

    let mut lines = Vec::with_capacity(grid.height() as usize);
    // Each cell costs ~19 escape bytes plus the glyph.
    let mut line = String::with_capacity(width * 20);

    for (index, &pixel) in grid.pixels().iter().enumerate() {
        let glyph = if config.suppress_glyph {
            ' '
        } else {
            config.glyph_table.char_at(glyph_index(luminance(pixel), levels))
        };

        line.push_str(&escape_code(pixel.r, pixel.g, pixel.b, config.paint_background));
        line.push(glyph);

        if (index + 1) % width == 0 {
            line.push_str(SGR_RESET);
            lines.push(std::mem::take(&mut line));
            line.reserve(width * 20);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_weights_green_heaviest() {
        let red = luminance(Pixel::new(255, 0, 0));
        let green = luminance(Pixel::new(0, 255, 0));
        let blue = luminance(Pixel::new(0, 0, 255));
        assert!(green > red);
        assert!(red > blue);
    }

    #[test]
    fn glyph_index_floor_quantization() {
        // 182.376 / 255 * 20 = 14.304 -> 14
        assert_eq!(glyph_index(0.7152 * 255.0, 20), 14);
        assert_eq!(glyph_index(0.0, 20), 0);
    }

    #[test]
    fn glyph_index_clamps_pure_white() {
        assert_eq!(glyph_index(255.0, 20), 19);
        assert_eq!(glyph_index(255.0, 1), 0);
    }

    #[test]
    fn escape_code_targets() {
        assert_eq!(escape_code(1, 2, 3, false), "\x1b[38;2;1;2;3m");
        assert_eq!(escape_code(1, 2, 3, true), "\x1b[48;2;1;2;3m");
    }
}
