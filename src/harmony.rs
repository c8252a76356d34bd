//! Hue-rotation harmony engine
//!
//! Every palette is produced by one primitive, [`rotate_hue`]: the base color
//! is converted to HSV once, each requested degree offset is added to the hue
//! (wrapping modulo a full turn) and the result is converted back. Saturation
//! and value are never touched. The named presets are fixed offset lists on
//! top of it.

use crate::color::{HexColor, LabelTone};
use crate::error::{HarmonyError, Result};
use crate::hsv::Hsv;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Complementary: opposite side of the color wheel
pub const COMPLEMENTARY_OFFSETS: [f64; 1] = [180.0];
/// Analogous: neighbours on either side, in (-30°, +30°) order
pub const ANALOGOUS_OFFSETS: [f64; 2] = [-30.0, 30.0];
/// Triadic: equilateral triangle, in (+120°, +240°) order
pub const TRIADIC_OFFSETS: [f64; 2] = [120.0, 240.0];

/// Label used for the unrotated input color
pub const BASE_LABEL: &str = "Your Color";

/// Rotate the hue of `base` by each offset in `offsets` (degrees).
///
/// Results come back in the same order as the offsets. Negative offsets are
/// fine: `-30.0` and `330.0` produce identical colors.
///
/// # Errors
/// `InvalidOffset` if any offset is NaN or infinite.
///
/// # Examples
/// ```rust
/// use hue_harmony::{rotate_hue, HexColor};
///
/// let base = HexColor::parse("#4682B4").unwrap();
/// let colors = rotate_hue(base, &[180.0]).unwrap();
/// assert_eq!(colors[0].to_hex(), "#B47846");
/// ```
pub fn rotate_hue(base: HexColor, offsets: &[f64]) -> Result<Vec<HexColor>> {
    if let Some(&bad) = offsets.iter().find(|d| !d.is_finite()) {
        return Err(HarmonyError::InvalidOffset(bad));
    }

    let hsv = Hsv::from(base);
    debug!(
        base = %base,
        hue_degrees = hsv.hue_degrees(),
        saturation = hsv.s,
        value = hsv.v,
        offsets = offsets.len(),
        "Rotating hue"
    );

    Ok(offsets.iter().map(|&degrees| rotate_one(hsv, degrees)).collect())
}

/// Parse `base` and rotate it; see [`rotate_hue`].
///
/// # Errors
/// `InvalidFormat` for malformed hex, `InvalidOffset` for non-finite offsets.
pub fn rotate_hue_hex(base: &str, offsets: &[f64]) -> Result<Vec<HexColor>> {
    rotate_hue(HexColor::parse(base)?, offsets)
}

/// Fixed-size variant used by the presets; their offsets are always finite
fn rotate_fixed<const N: usize>(base: HexColor, offsets: [f64; N]) -> [HexColor; N] {
    let hsv = Hsv::from(base);
    offsets.map(|degrees| rotate_one(hsv, degrees))
}

fn rotate_one(hsv: Hsv, degrees: f64) -> HexColor {
    let color = hsv.rotated(degrees).to_color();
    trace!(degrees, result = %color, "Rotated hue");
    color
}

/// The color 180° away on the hue circle
#[must_use]
pub fn complementary(base: HexColor) -> HexColor {
    let [complement] = rotate_fixed(base, COMPLEMENTARY_OFFSETS);
    complement
}

/// The colors 30° either side, as (-30°, +30°)
#[must_use]
pub fn analogous(base: HexColor) -> (HexColor, HexColor) {
    let [minus, plus] = rotate_fixed(base, ANALOGOUS_OFFSETS);
    (minus, plus)
}

/// The colors at +120° and +240°
#[must_use]
pub fn triadic(base: HexColor) -> (HexColor, HexColor) {
    let [first, second] = rotate_fixed(base, TRIADIC_OFFSETS);
    (first, second)
}

/// Which harmony a palette is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    /// 180°
    Complementary,
    /// -30° and +30°
    Analogous,
    /// +120° and +240°
    Triadic,
    /// Caller-supplied offsets
    Custom,
}

impl HarmonyKind {
    /// The named presets, in display order
    pub const PRESETS: [HarmonyKind; 3] = [Self::Complementary, Self::Analogous, Self::Triadic];

    /// Hue offsets in degrees; empty for `Custom`
    #[must_use]
    pub fn offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &COMPLEMENTARY_OFFSETS,
            Self::Analogous => &ANALOGOUS_OFFSETS,
            Self::Triadic => &TRIADIC_OFFSETS,
            Self::Custom => &[],
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::Custom => "Custom",
        }
    }

    /// Swatch label for a color rotated by `offset` degrees under this harmony
    #[must_use]
    pub fn label(self, offset: f64) -> String {
        match self {
            Self::Complementary => self.name().to_string(),
            _ => format!("{:+}° {}", offset, self.name()),
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One labeled palette entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub label: String,
    /// Degrees from the base hue; `None` for the base color itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    #[serde(rename = "hex")]
    pub color: HexColor,
    /// Whether the color counts as light (labels on it should be dark)
    pub light: bool,
}

impl Swatch {
    #[must_use]
    pub fn new(label: impl Into<String>, offset: Option<f64>, color: HexColor) -> Self {
        Self {
            label: label.into(),
            offset,
            color,
            light: color.is_light(),
        }
    }

    /// Swatch for the unrotated input color
    #[must_use]
    pub fn base(color: HexColor) -> Self {
        Self::new(BASE_LABEL, None, color)
    }

    /// Tone for the label text drawn on this swatch
    #[must_use]
    pub fn label_tone(&self) -> LabelTone {
        self.color.label_tone()
    }
}

/// A base color and the swatches of one harmony
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub base: HexColor,
    pub harmony: HarmonyKind,
    pub swatches: Vec<Swatch>,
}

impl Palette {
    /// Build the palette for `kind`. `custom_offsets` is only read for
    /// [`HarmonyKind::Custom`].
    ///
    /// # Errors
    /// `InvalidConfig` for a custom palette with no offsets, `InvalidOffset`
    /// for non-finite offsets.
    pub fn build(base: HexColor, kind: HarmonyKind, custom_offsets: &[f64]) -> Result<Self> {
        let offsets = match kind {
            HarmonyKind::Custom if custom_offsets.is_empty() => {
                return Err(HarmonyError::invalid_config(
                    "custom harmony requires at least one hue offset",
                ));
            },
            HarmonyKind::Custom => custom_offsets,
            preset => preset.offsets(),
        };

        let colors = rotate_hue(base, offsets)?;
        let swatches = offsets
            .iter()
            .zip(colors)
            .map(|(&offset, color)| Swatch::new(kind.label(offset), Some(offset), color))
            .collect();

        Ok(Self {
            base,
            harmony: kind,
            swatches,
        })
    }

    /// Colors of the swatches, in offset order
    pub fn colors(&self) -> impl Iterator<Item = HexColor> + '_ {
        self.swatches.iter().map(|swatch| swatch.color)
    }

    /// One-line description, e.g. "The complement of #4682B4 is #B47846"
    #[must_use]
    pub fn summary(&self) -> String {
        let colors: Vec<String> = self.colors().map(HexColor::to_hex).collect();
        match self.harmony {
            HarmonyKind::Complementary => {
                format!("The complement of {} is {}", self.base, colors.join(", "))
            },
            kind => format!(
                "{} colors of {}: {}",
                kind,
                self.base,
                colors.join(", ")
            ),
        }
    }
}
