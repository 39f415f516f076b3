mod ascii;
mod image_pipeline;
mod pixel;

use std::path::Path;

use image::DynamicImage;
use log::debug;

pub use ascii::{
    mapper::{escape_code, glyph_index, luminance},
    table::{GlyphTable, CLASSIC_RAMP},
};
pub use pixel::{Pixel, PixelGrid};

use ascii::mapper;
use image_pipeline::{adjust, loader, resize};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("output width must be at least one column")]
    ZeroWidth,
    #[error("output height must be at least one row")]
    ZeroHeight,
    #[error("glyph table must contain at least one glyph")]
    EmptyGlyphTable,
    #[error("{axis} factor must be finite, got {value}")]
    NonFiniteFactor { axis: &'static str, value: f32 },
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid render configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Immutable settings for one render session.
///
/// Factors of 1.0 leave the corresponding axis untouched. Negative factors
/// are tolerated; the adjuster clamps at the channel level.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Output width in terminal cells.
    pub width: u32,
    /// Output height in terminal cells.
    pub height: u32,
    pub contrast: f32,
    pub brightness: f32,
    /// Paint the cell background instead of the glyph foreground.
    pub paint_background: bool,
    /// Emit a blank space in place of the mapped glyph.
    pub suppress_glyph: bool,
    pub glyph_table: GlyphTable,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            contrast: 1.0,
            brightness: 1.0,
            paint_background: false,
            suppress_glyph: false,
            glyph_table: GlyphTable::classic(),
        }
    }
}

impl RenderConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.glyph_table.is_empty() {
            return Err(ConfigError::EmptyGlyphTable);
        }
        for (axis, value) in [("contrast", self.contrast), ("brightness", self.brightness)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteFactor { axis, value });
            }
        }
        Ok(())
    }
}

/// One image bound to one configuration.
///
/// Construction runs decode, resample and color adjustment eagerly and
/// keeps the adjusted grid; the escape-serialized lines are computed on
/// first access and cached for the session's lifetime.
pub struct RenderSession {
    pixels: PixelGrid,
    config: RenderConfig,
    lines: Option<Vec<String>>,
}

impl RenderSession {
    pub fn from_path<P: AsRef<Path>>(path: P, config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let image = loader::open_path(path)?;
        Ok(Self::build(image, config))
    }

    pub fn from_bytes(bytes: &[u8], config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let image = loader::open_bytes(bytes)?;
        Ok(Self::build(image, config))
    }

    pub fn from_image(image: DynamicImage, config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Self::build(image, config))
    }

    fn build(image: DynamicImage, config: RenderConfig) -> Self {
        let resized = resize::resample(image, config.width, config.height);
        let grid = loader::to_pixel_grid(&resized);
        let grid = adjust::apply(grid, config.contrast, config.brightness);
        Self { pixels: grid, config, lines: None }
    }

    /// The rendered lines, one per output row, each terminated by a reset
    /// escape. Computed once, then served from cache.
    pub fn lines(&mut self) -> &[String] {
        let Self { pixels, config, lines } = self;
        lines.get_or_insert_with(|| {
            debug!("rendering {}x{} cell grid", config.width, config.height);
            mapper::render_lines(pixels, config)
        })
    }

    /// The resampled, color-adjusted snapshot this session renders from.
    pub fn grid(&self) -> &PixelGrid {
        &self.pixels
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}
