//! Configuration conversion utilities for CLI arguments

use crate::cli::main_impl::{Cli, CliHarmony, CliOutputFormat};
use crate::{
    config::{OutputFormat, PaletteConfig},
    harmony::HarmonyKind,
    utils::InputValidator,
};
use anyhow::{Context, Result};

/// Convert CLI arguments to a `PaletteConfig`
pub(crate) struct CliConfigBuilder;

impl CliConfigBuilder {
    /// Build `PaletteConfig` from CLI arguments, layered over `--config` if given
    pub(crate) fn from_cli(cli: &Cli) -> Result<PaletteConfig> {
        let base = match &cli.config {
            Some(path) => PaletteConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?,
            None => PaletteConfig::default(),
        };

        let mut builder = PaletteConfig::builder()
            .output_format(
                cli.format
                    .map_or(base.output_format, Self::output_format),
            )
            .include_base(base.include_base && !cli.no_base)
            .show_luminance(base.show_luminance || cli.luminance);

        builder = if cli.harmonies.is_empty() {
            builder.harmonies(base.harmonies)
        } else {
            builder.harmonies(Self::harmony_kinds(&cli.harmonies))
        };

        let offsets = if cli.offsets.is_empty() {
            base.custom_offsets
        } else {
            cli.offsets.clone()
        };

        builder
            .custom_offsets(offsets)
            .build()
            .context("Invalid configuration")
    }

    /// Expand CLI harmony selections in order, dropping duplicates
    fn harmony_kinds(selected: &[CliHarmony]) -> Vec<HarmonyKind> {
        let mut kinds = Vec::new();
        for harmony in selected {
            let expanded: &[HarmonyKind] = match harmony {
                CliHarmony::Complementary => &[HarmonyKind::Complementary],
                CliHarmony::Analogous => &[HarmonyKind::Analogous],
                CliHarmony::Triadic => &[HarmonyKind::Triadic],
                CliHarmony::Custom => &[HarmonyKind::Custom],
                CliHarmony::All => &HarmonyKind::PRESETS,
            };
            for kind in expanded {
                if !kinds.contains(kind) {
                    kinds.push(*kind);
                }
            }
        }
        kinds
    }

    fn output_format(format: CliOutputFormat) -> OutputFormat {
        match format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Plain => OutputFormat::Plain,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }

    /// Validate CLI arguments for consistency
    pub(crate) fn validate_cli(cli: &Cli) -> Result<()> {
        InputValidator::validate_offsets(&cli.offsets).context("Invalid hue offset")?;

        if cli.harmonies.contains(&CliHarmony::Custom)
            && cli.offsets.is_empty()
            && cli.config.is_none()
        {
            anyhow::bail!("--harmony custom requires at least one --offset");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_test_cli() -> Cli {
        Cli {
            color: "#4682B4".to_string(),
            harmonies: Vec::new(),
            offsets: Vec::new(),
            format: None,
            no_base: false,
            luminance: false,
            verbose: 0,
            config: None,
        }
    }

    #[test]
    fn test_cli_config_defaults() {
        let cli = create_test_cli();
        let config = CliConfigBuilder::from_cli(&cli).unwrap();

        assert_eq!(config.harmonies, HarmonyKind::PRESETS.to_vec());
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.include_base);
        assert!(!config.show_luminance);
        assert!(config.custom_offsets.is_empty());
    }

    #[test]
    fn test_cli_config_conversion() {
        let mut cli = create_test_cli();
        cli.harmonies = vec![CliHarmony::Triadic, CliHarmony::All];
        cli.offsets = vec![-45.0];
        cli.format = Some(CliOutputFormat::Plain);
        cli.no_base = true;
        cli.luminance = true;

        let config = CliConfigBuilder::from_cli(&cli).unwrap();

        assert_eq!(
            config.harmonies,
            vec![
                HarmonyKind::Triadic,
                HarmonyKind::Complementary,
                HarmonyKind::Analogous,
                HarmonyKind::Custom,
            ]
        );
        assert_eq!(config.custom_offsets, vec![-45.0]);
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert!(!config.include_base);
        assert!(config.show_luminance);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "harmonies": ["analogous"], "output_format": "json", "custom_offsets": [15.0] }}"#
        )
        .unwrap();

        let mut cli = create_test_cli();
        cli.config = Some(file.path().to_path_buf());
        cli.format = Some(CliOutputFormat::Plain);

        let config = CliConfigBuilder::from_cli(&cli).unwrap();
        assert_eq!(
            config.harmonies,
            vec![HarmonyKind::Analogous, HarmonyKind::Custom]
        );
        assert_eq!(config.custom_offsets, vec![15.0]);
        assert_eq!(config.output_format, OutputFormat::Plain);
    }

    #[test]
    fn test_missing_config_file() {
        let mut cli = create_test_cli();
        cli.config = Some("/nonexistent/palette.json".into());
        let err = CliConfigBuilder::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_cli_validation() {
        let mut cli = create_test_cli();
        assert!(CliConfigBuilder::validate_cli(&cli).is_ok());

        cli.harmonies = vec![CliHarmony::Custom];
        assert!(CliConfigBuilder::validate_cli(&cli).is_err());

        cli.offsets = vec![60.0];
        assert!(CliConfigBuilder::validate_cli(&cli).is_ok());

        cli.offsets = vec![f64::NAN];
        assert!(CliConfigBuilder::validate_cli(&cli).is_err());
    }
}
