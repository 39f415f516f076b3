use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use ansi_render::{GlyphTable, RenderConfig, RenderSession};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert images to true-color ANSI glyph lines")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an image to stdout for a quick preview
    Preview(PreviewArgs),
    /// Render an image and write the lines to disk
    Convert(ConvertArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input image path
    input: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image path
    input: PathBuf,
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// Target width in cells
    #[arg(long, default_value_t = 40)]
    width: u32,
    /// Target height in cells
    #[arg(long, default_value_t = 20)]
    height: u32,
    /// Contrast factor (1.0 leaves the image unchanged)
    #[arg(long, default_value_t = 1.0)]
    contrast: f32,
    /// Brightness factor (1.0 leaves the image unchanged)
    #[arg(long, default_value_t = 1.0)]
    brightness: f32,
    /// Paint cell backgrounds instead of glyph foregrounds
    #[arg(long, default_value_t = false)]
    background: bool,
    /// Emit blank spaces instead of glyphs, keeping the colors
    #[arg(long = "no-glyph", default_value_t = false)]
    no_glyph: bool,
    /// Glyph ramp preset, darkest character first
    #[arg(long, value_enum, default_value = "classic")]
    ramp: RampPreset,
    /// Custom glyph ramp overriding the preset
    #[arg(long)]
    ramp_chars: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RampPreset {
    Classic,
    Standard,
    Blocks,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview(args),
        Commands::Convert(args) => convert(args),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let mut session = RenderSession::from_path(&args.input, args.settings.to_config())
        .with_context(|| format!("failed to render {:?}", args.input))?;
    for line in session.lines() {
        println!("{}", line);
    }
    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let mut session = RenderSession::from_path(&args.input, args.settings.to_config())
        .with_context(|| format!("failed to render {:?}", args.input))?;

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {:?}", args.output))?;
    for line in session.lines() {
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

impl RenderSettings {
    fn to_config(&self) -> RenderConfig {
        let glyph_table = match &self.ramp_chars {
            Some(chars) => GlyphTable::new(chars.clone()),
            None => self.ramp.to_table(),
        };
        RenderConfig {
            width: self.width,
            height: self.height,
            contrast: self.contrast,
            brightness: self.brightness,
            paint_background: self.background,
            suppress_glyph: self.no_glyph,
            glyph_table,
        }
    }
}

impl RampPreset {
    fn to_table(self) -> GlyphTable {
        match self {
            RampPreset::Classic => GlyphTable::classic(),
            RampPreset::Standard => GlyphTable::standard(),
            RampPreset::Blocks => GlyphTable::blocks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> RenderSettings {
        RenderSettings {
            width: 8,
            height: 4,
            contrast: 1.2,
            brightness: 0.9,
            background: true,
            no_glyph: false,
            ramp: RampPreset::Standard,
            ramp_chars: None,
        }
    }

    #[test]
    fn settings_map_onto_config() {
        let config = settings().to_config();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 4);
        assert!(config.paint_background);
        assert!(!config.suppress_glyph);
        assert_eq!(config.glyph_table, GlyphTable::standard());
    }

    #[test]
    fn custom_ramp_overrides_preset() {
        let mut settings = settings();
        settings.ramp_chars = Some(" #".to_string());
        let config = settings.to_config();
        assert_eq!(config.glyph_table.chars(), &[' ', '#']);
    }
}
