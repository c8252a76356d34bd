//! Configuration types for palette generation and rendering

use crate::error::{HarmonyError, Result};
use crate::harmony::HarmonyKind;
use crate::utils::InputValidator;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on caller-supplied hue offsets
pub const MAX_CUSTOM_OFFSETS: usize = 36;

/// How rendered palettes are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Swatches on 24-bit ANSI backgrounds
    #[default]
    Text,
    /// Same lines without escape codes
    Plain,
    /// Machine-readable JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration for which palettes to build and how to show them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Harmonies to build, in output order
    pub harmonies: Vec<HarmonyKind>,

    /// Offsets in degrees for `HarmonyKind::Custom`
    pub custom_offsets: Vec<f64>,

    /// Output format
    pub output_format: OutputFormat,

    /// Show the input color as the first swatch of each palette
    pub include_base: bool,

    /// Print the luminance next to each swatch
    pub show_luminance: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            harmonies: HarmonyKind::PRESETS.to_vec(),
            custom_offsets: Vec::new(),
            output_format: OutputFormat::default(),
            include_base: true,
            show_luminance: false,
        }
    }
}

impl PaletteConfig {
    /// Create a new configuration builder
    ///
    /// # Examples
    /// ```rust
    /// use hue_harmony::{HarmonyKind, OutputFormat, PaletteConfig};
    ///
    /// let config = PaletteConfig::builder()
    ///     .harmonies(vec![HarmonyKind::Complementary])
    ///     .output_format(OutputFormat::Json)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.harmonies.len(), 1);
    /// ```
    #[must_use]
    pub fn builder() -> PaletteConfigBuilder {
        PaletteConfigBuilder::default()
    }

    /// Load a JSON configuration file and validate it.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            HarmonyError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read config file '{}': {}",
                    path.as_ref().display(),
                    e
                ),
            ))
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration parameters
    ///
    /// # Validation Rules
    ///
    /// - At least one harmony must be selected
    /// - `Custom` requires 1 to `MAX_CUSTOM_OFFSETS` offsets
    /// - Custom offsets must be finite
    pub fn validate(&self) -> Result<()> {
        if self.harmonies.is_empty() {
            return Err(HarmonyError::invalid_config(
                "at least one harmony must be selected",
            ));
        }

        if self.harmonies.contains(&HarmonyKind::Custom) && self.custom_offsets.is_empty() {
            return Err(HarmonyError::invalid_config(
                "custom harmony selected but no hue offsets given",
            ));
        }

        if self.custom_offsets.len() > MAX_CUSTOM_OFFSETS {
            return Err(HarmonyError::config_value_error(
                "custom offset count",
                self.custom_offsets.len(),
                &format!("0-{}", MAX_CUSTOM_OFFSETS),
            ));
        }

        InputValidator::validate_offsets(&self.custom_offsets)
    }
}

/// Builder for `PaletteConfig`
#[derive(Debug, Default)]
pub struct PaletteConfigBuilder {
    config: PaletteConfig,
}

impl PaletteConfigBuilder {
    /// Replace the harmony list
    #[must_use]
    pub fn harmonies(mut self, harmonies: Vec<HarmonyKind>) -> Self {
        self.config.harmonies = harmonies;
        self
    }

    /// Append one harmony, skipping duplicates
    #[must_use]
    pub fn harmony(mut self, harmony: HarmonyKind) -> Self {
        if !self.config.harmonies.contains(&harmony) {
            self.config.harmonies.push(harmony);
        }
        self
    }

    /// Set custom offsets; adds `HarmonyKind::Custom` when non-empty
    #[must_use]
    pub fn custom_offsets(mut self, offsets: Vec<f64>) -> Self {
        let has_offsets = !offsets.is_empty();
        self.config.custom_offsets = offsets;
        if has_offsets {
            self.harmony(HarmonyKind::Custom)
        } else {
            self
        }
    }

    #[must_use]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    #[must_use]
    pub fn include_base(mut self, include: bool) -> Self {
        self.config.include_base = include;
        self
    }

    #[must_use]
    pub fn show_luminance(mut self, show: bool) -> Self {
        self.config.show_luminance = show;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<PaletteConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
