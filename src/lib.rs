#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

//! # Hue Harmony
//!
//! Color-harmony palettes from a single `#RRGGBB` color.
//!
//! The input is converted to HSV, its hue is rotated by fixed angular offsets
//! and each result is converted back and re-encoded as hex. Saturation and
//! value never change; only the hue moves around the color wheel.
//!
//! ## Features
//!
//! - **Hex codec**: strict `#RRGGBB` parsing (case-insensitive) and uppercase encoding
//! - **Harmonies**: complementary (180°), analogous (±30°), triadic (+120°/+240°)
//!   and arbitrary offset lists through one generic rotation primitive
//! - **Legible labels**: BT.709 luminance with a light/dark split at 0.55
//! - **CLI Integration**: `hue-harmony` binary rendering terminal swatches or
//!   JSON (enable with `cli` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use hue_harmony::{analogous, complementary, encode_hex, is_light_color, parse_hex, triadic};
//!
//! # fn example() -> hue_harmony::Result<()> {
//! let steel_blue = parse_hex("#4682B4")?;
//!
//! assert_eq!(encode_hex(complementary(steel_blue)), "#B47846");
//!
//! let (minus_30, plus_30) = analogous(steel_blue);
//! let (plus_120, plus_240) = triadic(steel_blue);
//! assert_eq!(encode_hex(minus_30), "#46B4AF");
//! assert_eq!(encode_hex(plus_240), "#82B446");
//!
//! // pick black or white text for a swatch
//! assert!(!is_light_color(steel_blue));
//! # let _ = (plus_30, plus_120);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ### Feature Flags
//!
//! - `cli` (default): command-line interface and tracing subscriber setup
//! - `tracing-json`: JSON log output for the CLI
//!
//! ### Library-Only Usage
//!
//! ```toml
//! [dependencies]
//! hue-harmony = { version = "0.1", default-features = false }
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod harmony;
pub mod hsv;
pub mod services;
#[cfg(feature = "cli")]
pub mod tracing_config;
pub mod utils;

// Public API exports
pub use color::{HexColor, LabelTone, LIGHT_LUMINANCE_THRESHOLD};
pub use config::{OutputFormat, PaletteConfig, PaletteConfigBuilder};
pub use error::{HarmonyError, Result};
pub use harmony::{
    analogous, complementary, rotate_hue, rotate_hue_hex, triadic, HarmonyKind, Palette, Swatch,
};
pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use services::PaletteRenderer;
pub use utils::InputValidator;

#[cfg(feature = "cli")]
pub use tracing_config::{init_cli_tracing, init_library_tracing, TracingConfig, TracingFormat};

/// Parse a `#RRGGBB` color
///
/// # Errors
/// `InvalidFormat` when the input is not `#` followed by exactly six hex digits.
pub fn parse_hex(input: &str) -> Result<HexColor> {
    HexColor::parse(input)
}

/// Encode a color as uppercase `#RRGGBB`
#[must_use]
pub fn encode_hex(color: HexColor) -> String {
    color.to_hex()
}

/// Whether labels on this color should be dark (luminance above 0.55)
#[must_use]
pub fn is_light_color(color: HexColor) -> bool {
    color.is_light()
}

/// Build one palette per configured harmony, in configuration order
///
/// # Errors
/// `InvalidConfig`/`InvalidOffset` when `config` does not validate.
///
/// # Examples
/// ```rust
/// use hue_harmony::{generate_palettes, parse_hex, HarmonyKind, PaletteConfig};
///
/// let config = PaletteConfig::builder()
///     .harmonies(vec![HarmonyKind::Complementary])
///     .build()
///     .unwrap();
/// let palettes = generate_palettes(parse_hex("#4682B4").unwrap(), &config).unwrap();
/// assert_eq!(palettes[0].summary(), "The complement of #4682B4 is #B47846");
/// ```
pub fn generate_palettes(base: HexColor, config: &PaletteConfig) -> Result<Vec<Palette>> {
    config.validate()?;

    config
        .harmonies
        .iter()
        .map(|&kind| {
            let _span = tracing_span(base, kind).entered();
            Palette::build(base, kind, &config.custom_offsets)
        })
        .collect()
}

fn tracing_span(base: HexColor, kind: HarmonyKind) -> tracing::Span {
    tracing::debug_span!("palette", base = %base, harmony = %kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_api() {
        let base = parse_hex("#4682b4").unwrap();
        assert_eq!(encode_hex(base), "#4682B4");
        assert_eq!(encode_hex(complementary(base)), "#B47846");
        assert!(is_light_color(parse_hex("#FFFFFF").unwrap()));
        assert!(!is_light_color(parse_hex("#000000").unwrap()));
    }

    #[test]
    fn test_generate_palettes_follows_config_order() {
        let base = parse_hex("#4682B4").unwrap();
        let config = PaletteConfig::builder()
            .harmonies(vec![HarmonyKind::Triadic, HarmonyKind::Complementary])
            .custom_offsets(vec![90.0])
            .build()
            .unwrap();

        let palettes = generate_palettes(base, &config).unwrap();
        let kinds: Vec<HarmonyKind> = palettes.iter().map(|p| p.harmony).collect();
        assert_eq!(
            kinds,
            vec![
                HarmonyKind::Triadic,
                HarmonyKind::Complementary,
                HarmonyKind::Custom
            ]
        );
        assert_eq!(palettes[2].swatches.len(), 1);
    }

    #[test]
    fn test_generate_palettes_rejects_invalid_config() {
        let base = parse_hex("#4682B4").unwrap();
        let mut config = PaletteConfig::default();
        config.harmonies.clear();
        assert!(generate_palettes(base, &config).is_err());
    }
}
