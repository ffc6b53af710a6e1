//! Command-line interface for rendering, exporting, and sharing patterns

use crate::export::{render_offscreen, vector};
use crate::io::configuration::{
    DEFAULT_BASE_URL, DEFAULT_EXPORT_SIZE, DEFAULT_PREVIEW_SIZE, DEFAULT_SEED,
};
use crate::io::error::{PatternError, Result};
use crate::io::progress::ProgressManager;
use crate::model::config::{PatternConfig, PatternKind, PatternState};
use crate::model::palettes::{COLOR_PALETTES, find_palette};
use crate::model::presets::{all_presets, default_config, find_preset};
use crate::state::codec;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Pattern family selector for command-line arguments
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Rotated grid of polygon shapes
    Geometric,
    /// Dot field in grid or scattered layout
    Dots,
    /// Blocky random grain texture
    Noise,
}

impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geometric => write!(f, "geometric"),
            Self::Dots => write!(f, "dots"),
            Self::Noise => write!(f, "noise"),
        }
    }
}

impl From<KindArg> for PatternKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Geometric => Self::Geometric,
            KindArg::Dots => Self::Dots,
            KindArg::Noise => Self::Noise,
        }
    }
}

#[derive(Parser)]
#[command(name = "patternplay")]
#[command(
    author,
    version,
    about = "Generate procedural 2D patterns with raster and vector export"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Render a pattern to a PNG or SVG file
    Render {
        /// Preset name to render (see `presets`)
        #[arg(short, long)]
        preset: Option<String>,

        /// Share token to render instead of a preset
        #[arg(short, long, conflicts_with = "preset")]
        token: Option<String>,

        /// Pattern kind rendered with its defaults when no preset or token is given
        #[arg(short, long, value_enum, default_value_t = KindArg::Geometric)]
        kind: KindArg,

        /// Color palette applied on top of the selected configuration
        #[arg(long)]
        palette: Option<String>,

        /// Output file path; a .svg extension selects vector export
        #[arg(short, long, default_value = "pattern.png")]
        output: PathBuf,

        /// Square output size in pixels
        #[arg(short, long, default_value_t = DEFAULT_EXPORT_SIZE)]
        size: u32,

        /// Random seed for reproducible jitter
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Render every preset in every catalog into a directory
    Gallery {
        /// Directory receiving one PNG per preset
        #[arg(value_name = "DIR")]
        out_dir: PathBuf,

        /// Square output size in pixels
        #[arg(short, long, default_value_t = DEFAULT_PREVIEW_SIZE)]
        size: u32,

        /// Random seed for reproducible jitter
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// List the preset catalogs
    Presets,

    /// List the color palettes
    Palettes,

    /// Print the share token and URL for a preset
    Share {
        /// Preset name to share
        preset: String,

        /// Name embedded in the share token
        #[arg(short, long)]
        name: Option<String>,

        /// Base URL the token is appended to
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Decode a share token and describe the pattern it carries
    Decode {
        /// The opaque token, with or without its URL prefix
        token: String,
    },
}

/// Executes parsed CLI commands against the pattern core
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error when a preset or palette name is unknown, a share
    /// token is malformed, or rendering/export fails.
    pub fn run(self) -> Result<()> {
        match self.cli.command {
            Command::Render {
                preset,
                token,
                kind,
                palette,
                output,
                size,
                seed,
            } => render_command(
                preset.as_deref(),
                token.as_deref(),
                kind,
                palette.as_deref(),
                &output,
                size,
                seed,
            ),
            Command::Gallery { out_dir, size, seed } => gallery_command(&out_dir, size, seed),
            Command::Presets => {
                list_presets();
                Ok(())
            }
            Command::Palettes => {
                list_palettes();
                Ok(())
            }
            Command::Share {
                preset,
                name,
                base_url,
            } => share_command(&preset, name.as_deref(), &base_url),
            Command::Decode { token } => {
                decode_command(&token);
                Ok(())
            }
        }
    }
}

fn resolve_config(
    preset: Option<&str>,
    token: Option<&str>,
    kind: KindArg,
) -> Result<PatternConfig> {
    if let Some(token) = token {
        return codec::decode(token)
            .map(|state| state.config)
            .ok_or(PatternError::MalformedToken);
    }
    if let Some(name) = preset {
        return find_preset(name)
            .map(|p| p.config.clone())
            .ok_or_else(|| PatternError::UnknownPreset {
                name: name.to_string(),
            });
    }
    Ok(default_config(kind.into()))
}

fn render_command(
    preset: Option<&str>,
    token: Option<&str>,
    kind: KindArg,
    palette: Option<&str>,
    output: &Path,
    size: u32,
    seed: u64,
) -> Result<()> {
    let mut config = resolve_config(preset, token, kind)?;
    if let Some(name) = palette {
        let palette = find_palette(name).ok_or_else(|| {
            crate::io::error::invalid_parameter("palette", &name, &"no palette with that name")
        })?;
        config = palette.apply(&config);
    }

    let is_svg = output.extension().and_then(|e| e.to_str()) == Some("svg");
    if is_svg {
        let markup = vector::to_svg(size, size, &config)?;
        std::fs::write(output, markup).map_err(|e| PatternError::FileSystem {
            path: output.to_path_buf(),
            operation: "write SVG",
            source: e,
        })?;
    } else {
        let surface = render_offscreen(&config, size, size, seed)?;
        crate::export::raster::save_png(&surface, output)?;
    }
    Ok(())
}

fn gallery_command(out_dir: &Path, size: u32, seed: u64) -> Result<()> {
    let presets: Vec<_> = all_presets().collect();
    let progress = ProgressManager::new(presets.len());

    for preset in presets {
        progress.start_item(preset.name);
        let surface = render_offscreen(&preset.config, size, size, seed)?;
        let file_name = format!("{}.png", slugify(preset.name));
        crate::export::raster::save_png(&surface, &out_dir.join(file_name))?;
        progress.complete_item();
    }

    progress.finish();
    Ok(())
}

fn slugify(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

// Allow prints for user-facing catalog listings
#[allow(clippy::print_stdout)]
fn list_presets() {
    for preset in all_presets() {
        println!("{:10} {}", preset.config.kind().to_string(), preset.name);
    }
}

#[allow(clippy::print_stdout)]
fn list_palettes() {
    for palette in &COLOR_PALETTES {
        println!(
            "{:16} {} {} {} {}  {}",
            palette.name,
            palette.primary,
            palette.secondary,
            palette.accent,
            palette.background,
            palette.description
        );
    }
}

#[allow(clippy::print_stdout)]
fn share_command(preset: &str, name: Option<&str>, base_url: &str) -> Result<()> {
    let preset = find_preset(preset).ok_or_else(|| PatternError::UnknownPreset {
        name: preset.to_string(),
    })?;
    let share_name = name.or(Some(preset.name));
    let token = codec::encode(&preset.config, share_name)?;
    let url = codec::share_url(base_url, &preset.config, share_name)?;
    println!("token: {token}");
    println!("url:   {url}");
    Ok(())
}

// Decode failures are non-fatal: report and fall back to the default state
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn decode_command(token: &str) {
    match codec::decode(token) {
        Some(state) => describe_state(&state),
        None => {
            eprintln!("Could not decode the share token; showing the default pattern instead");
            describe_state(&PatternState::new(
                default_config(PatternKind::Geometric),
                "",
            ));
        }
    }
}

#[allow(clippy::print_stdout)]
fn describe_state(state: &PatternState) {
    println!("name: {}", state.name);
    println!("kind: {}", state.kind());
    match serde_json::to_string_pretty(&state.config) {
        Ok(json) => println!("config: {json}"),
        Err(_) => println!("config: <unserializable>"),
    }
}
