//! Hue Harmony CLI Tool
//!
//! Command-line interface that turns one hex color into harmony palettes.

use super::config::CliConfigBuilder;
use crate::{
    config::PaletteConfig,
    generate_palettes,
    services::PaletteRenderer,
    tracing_config::{events, init_cli_tracing, spans},
    utils::InputValidator,
};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Color harmony palette generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "hue-harmony")]
pub struct Cli {
    /// Base color as #RRGGBB (case-insensitive, surrounding whitespace ignored)
    #[arg(value_name = "COLOR", default_value = "#4682B4")]
    pub color: String,

    /// Harmony to generate; repeat for several [default: all presets]
    #[arg(short = 'H', long = "harmony", value_enum)]
    pub harmonies: Vec<CliHarmony>,

    /// Extra hue offset in degrees for a custom palette; repeat or comma-separate
    #[arg(
        short = 'o',
        long = "offset",
        value_name = "DEGREES",
        allow_hyphen_values = true,
        value_delimiter = ','
    )]
    pub offsets: Vec<f64>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<CliOutputFormat>,

    /// Do not show the base color as the first swatch
    #[arg(long)]
    pub no_base: bool,

    /// Print the luminance next to each swatch
    #[arg(long)]
    pub luminance: bool,

    /// Enable verbose logging (-v: INFO, -vv: DEBUG, -vvv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON configuration file; command-line flags override its values
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum CliHarmony {
    Complementary,
    Analogous,
    Triadic,
    Custom,
    /// Complementary, analogous and triadic
    All,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum CliOutputFormat {
    Text,
    Plain,
    Json,
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose).context("Failed to initialize tracing")?;

    // Validate CLI arguments
    CliConfigBuilder::validate_cli(&cli).context("Invalid CLI arguments")?;

    // Convert CLI arguments to palette configuration
    let config = CliConfigBuilder::from_cli(&cli).context("Failed to build configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli.color, &config, &mut out)?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}

/// Parse `input`, build every configured palette and render it to `out`
pub fn run<W: Write>(input: &str, config: &PaletteConfig, out: &mut W) -> Result<()> {
    let _session = spans::session(input, config.harmonies.len()).entered();

    let base = match InputValidator::parse_user_color(input) {
        Ok(color) => color,
        Err(e) => {
            events::warning_with_recommendation(
                &e.to_string(),
                "pass a color such as #4682B4 or #ff5733",
            );
            return Err(e).with_context(|| format!("Invalid color '{}'", input.trim()));
        },
    };

    info!(base = %base, harmonies = config.harmonies.len(), "Generating palettes");
    debug!(
        luminance = base.luminance(),
        light = base.is_light(),
        "Base color"
    );

    let palettes = generate_palettes(base, config).context("Failed to generate palettes")?;

    let _render = spans::render(&config.output_format.to_string(), palettes.len()).entered();
    PaletteRenderer::new(config)
        .render(&palettes, out)
        .context("Failed to write palettes")?;

    Ok(())
}

fn init_tracing(verbose_count: u8) -> Result<()> {
    init_cli_tracing(verbose_count).context("Failed to initialize tracing subscriber")?;
    debug!(verbosity = verbose_count, "Tracing initialized");
    Ok(())
}
