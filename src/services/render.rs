//! Palette rendering service
//!
//! Turns palettes into terminal swatches or JSON, keeping presentation
//! concerns out of the harmony engine.

use crate::{
    color::HexColor,
    config::{OutputFormat, PaletteConfig},
    error::Result,
    harmony::{Palette, Swatch},
};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

const ANSI_RESET: &str = "\x1b[0m";
const LABEL_WIDTH: usize = 16;

/// 24-bit ANSI escape setting `color` as the foreground
#[must_use]
pub fn ansi_fg(color: HexColor) -> String {
    let (r, g, b) = color.channels();
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// 24-bit ANSI escape setting `color` as the background
#[must_use]
pub fn ansi_bg(color: HexColor) -> String {
    let (r, g, b) = color.channels();
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

#[derive(Serialize)]
struct SwatchView<'a> {
    #[serde(flatten)]
    swatch: &'a Swatch,
    #[serde(skip_serializing_if = "Option::is_none")]
    luminance: Option<f64>,
}

#[derive(Serialize)]
struct PaletteView<'a> {
    base: HexColor,
    harmony: crate::harmony::HarmonyKind,
    swatches: Vec<SwatchView<'a>>,
    summary: String,
}

/// Service writing palettes in the configured output format
pub struct PaletteRenderer {
    format: OutputFormat,
    include_base: bool,
    show_luminance: bool,
}

impl PaletteRenderer {
    #[must_use]
    pub fn new(config: &PaletteConfig) -> Self {
        Self {
            format: config.output_format,
            include_base: config.include_base,
            show_luminance: config.show_luminance,
        }
    }

    /// Write all palettes to `out`
    ///
    /// # Errors
    /// `Io` when writing fails, `Serialization` when JSON encoding fails.
    pub fn render<W: Write>(&self, palettes: &[Palette], out: &mut W) -> Result<()> {
        debug!(
            format = %self.format,
            palettes = palettes.len(),
            "Rendering palettes"
        );

        match self.format {
            OutputFormat::Json => self.render_json(palettes, out),
            OutputFormat::Text | OutputFormat::Plain => {
                for (index, palette) in palettes.iter().enumerate() {
                    if index > 0 {
                        writeln!(out)?;
                    }
                    self.render_palette_lines(palette, out)?;
                }
                Ok(())
            },
        }
    }

    /// Render into a `String` instead of a writer
    pub fn render_to_string(&self, palettes: &[Palette]) -> Result<String> {
        let mut buffer = Vec::new();
        self.render(palettes, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Base swatch (if enabled) followed by the palette's swatches
    fn swatches<'a>(&self, palette: &'a Palette, base: &'a Swatch) -> Vec<&'a Swatch> {
        let mut swatches = Vec::with_capacity(palette.swatches.len() + 1);
        if self.include_base {
            swatches.push(base);
        }
        swatches.extend(palette.swatches.iter());
        swatches
    }

    fn render_palette_lines<W: Write>(&self, palette: &Palette, out: &mut W) -> Result<()> {
        writeln!(out, "{}", palette.harmony)?;

        let base = Swatch::base(palette.base);
        for swatch in self.swatches(palette, &base) {
            writeln!(out, "{}", self.format_swatch(swatch))?;
        }

        writeln!(out, "{}", palette.summary())?;
        Ok(())
    }

    /// One swatch line: label and hex, colored for `Text`, tagged for `Plain`
    #[must_use]
    pub fn format_swatch(&self, swatch: &Swatch) -> String {
        let body = format!(" {:<width$} {} ", swatch.label, swatch.color, width = LABEL_WIDTH);
        let mut line = match self.format {
            OutputFormat::Text => format!(
                "{}{}{}{}",
                ansi_bg(swatch.color),
                ansi_fg(swatch.label_tone().color()),
                body,
                ANSI_RESET
            ),
            OutputFormat::Plain | OutputFormat::Json => {
                let tone = if swatch.light { "light" } else { "dark" };
                format!("{}({})", body, tone)
            },
        };

        if self.show_luminance {
            line.push_str(&format!("  luminance {:.3}", swatch.color.luminance()));
        }
        line
    }

    fn render_json<W: Write>(&self, palettes: &[Palette], out: &mut W) -> Result<()> {
        let bases: Vec<Swatch> = palettes.iter().map(|p| Swatch::base(p.base)).collect();
        let views: Vec<PaletteView<'_>> = palettes
            .iter()
            .zip(&bases)
            .map(|(palette, base)| PaletteView {
                base: palette.base,
                harmony: palette.harmony,
                swatches: self
                    .swatches(palette, base)
                    .into_iter()
                    .map(|swatch| SwatchView {
                        swatch,
                        luminance: self.show_luminance.then(|| swatch.color.luminance()),
                    })
                    .collect(),
                summary: palette.summary(),
            })
            .collect();

        serde_json::to_writer_pretty(&mut *out, &views)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony::HarmonyKind;

    fn steel_blue_palette(kind: HarmonyKind) -> Palette {
        Palette::build(HexColor::parse("#4682B4").unwrap(), kind, &[]).unwrap()
    }

    fn renderer(format: OutputFormat) -> PaletteRenderer {
        PaletteRenderer::new(
            &PaletteConfig::builder()
                .output_format(format)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_ansi_escapes() {
        let color = HexColor::new(255, 128, 64);
        assert_eq!(ansi_fg(color), "\x1b[38;2;255;128;64m");
        assert_eq!(ansi_bg(color), "\x1b[48;2;255;128;64m");
    }

    #[test]
    fn test_text_swatch_picks_contrasting_label() {
        let renderer = renderer(OutputFormat::Text);

        // dark background, white text
        let dark = Swatch::base(HexColor::parse("#4682B4").unwrap());
        let line = renderer.format_swatch(&dark);
        assert!(line.starts_with("\x1b[48;2;70;130;180m\x1b[38;2;255;255;255m"));
        assert!(line.contains("#4682B4"));
        assert!(line.ends_with(ANSI_RESET));

        // light background, black text
        let light = Swatch::base(HexColor::parse("#FFFF00").unwrap());
        let line = renderer.format_swatch(&light);
        assert!(line.contains("\x1b[38;2;0;0;0m"));
    }

    #[test]
    fn test_plain_output() {
        let output = renderer(OutputFormat::Plain)
            .render_to_string(&[steel_blue_palette(HarmonyKind::Complementary)])
            .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Complementary");
        assert!(lines[1].contains("Your Color"));
        assert!(lines[1].contains("#4682B4"));
        assert!(lines[1].ends_with("(dark)"));
        assert!(lines[2].contains("#B47846"));
        assert_eq!(lines[3], "The complement of #4682B4 is #B47846");
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_plain_output_without_base_and_with_luminance() {
        let config = PaletteConfig::builder()
            .output_format(OutputFormat::Plain)
            .include_base(false)
            .show_luminance(true)
            .build()
            .unwrap();
        let output = PaletteRenderer::new(&config)
            .render_to_string(&[steel_blue_palette(HarmonyKind::Analogous)])
            .unwrap();

        assert!(!output.contains("Your Color"));
        assert!(output.contains("-30° Analogous"));
        assert!(output.contains("luminance "));
    }

    #[test]
    fn test_palettes_are_separated_by_blank_line() {
        let output = renderer(OutputFormat::Plain)
            .render_to_string(&[
                steel_blue_palette(HarmonyKind::Complementary),
                steel_blue_palette(HarmonyKind::Triadic),
            ])
            .unwrap();
        assert!(output.contains("#B47846\n\nTriadic\n"));
    }

    #[test]
    fn test_json_output() {
        let output = renderer(OutputFormat::Json)
            .render_to_string(&[steel_blue_palette(HarmonyKind::Triadic)])
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let palette = &value[0];
        assert_eq!(palette["base"], "#4682B4");
        assert_eq!(palette["harmony"], "triadic");
        assert_eq!(palette["swatches"][0]["label"], "Your Color");
        assert_eq!(palette["swatches"][1]["hex"], "#B44682");
        assert_eq!(palette["swatches"][1]["offset"], 120.0);
        assert_eq!(palette["swatches"][2]["hex"], "#82B446");
        assert!(palette["swatches"][0].get("luminance").is_none());
    }
}
