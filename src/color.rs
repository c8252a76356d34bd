//! Hex color codec
//!
//! Parses and validates `#RRGGBB` strings into 8-bit RGB channels, encodes
//! channels back to uppercase hex, and classifies colors as light or dark so
//! labels drawn on top of them stay legible.

use crate::error::{HarmonyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// BT.709 weight of the red channel
pub const LUMA_RED: f64 = 0.2126;
/// BT.709 weight of the green channel
pub const LUMA_GREEN: f64 = 0.7152;
/// BT.709 weight of the blue channel
pub const LUMA_BLUE: f64 = 0.0722;

/// Colors with luminance strictly above this value are classified as light.
///
/// Sits above 0.5 so that mid-tones fall on the dark side.
pub const LIGHT_LUMINANCE_THRESHOLD: f64 = 0.55;

/// A 24-bit sRGB color.
///
/// Created by parsing user input with [`HexColor::parse`] or from channels
/// computed by the harmony engine. Serializes as its `#RRGGBB` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Create a color from three 8-bit channels
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from untrusted integer channels.
    ///
    /// # Errors
    /// `ChannelOutOfRange` naming the first channel outside 0-255.
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        let check = |channel: char, value: i64| -> Result<u8> {
            u8::try_from(value).map_err(|_| HarmonyError::channel_out_of_range(channel, value))
        };

        Ok(Self::new(check('R', r)?, check('G', g)?, check('B', b)?))
    }

    /// Parse a `#RRGGBB` string (hex digits are case-insensitive).
    ///
    /// No trimming is performed; surrounding whitespace is a format error.
    ///
    /// # Errors
    /// `InvalidFormat` when the input does not start with `#`, is not exactly
    /// 7 characters long, or contains a non-hex digit.
    ///
    /// # Examples
    /// ```rust
    /// use hue_harmony::HexColor;
    ///
    /// let steel_blue = HexColor::parse("#4682b4").unwrap();
    /// assert_eq!(steel_blue.channels(), (70, 130, 180));
    /// assert!(HexColor::parse("4682B4").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let Some(digits) = input.strip_prefix('#') else {
            return Err(HarmonyError::hex_format_error(input, "does not start with '#'"));
        };

        if input.len() != 7 {
            return Err(HarmonyError::hex_format_error(
                input,
                "must be exactly 7 characters long",
            ));
        }

        let nibble = |c: u8| -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        };

        let mut channels = [0u8; 3];
        for (channel, pair) in channels.iter_mut().zip(digits.as_bytes().chunks_exact(2)) {
            let (Some(hi), Some(lo)) = (nibble(pair[0]), nibble(pair[1])) else {
                return Err(HarmonyError::hex_format_error(input, "contains non-hex digits"));
            };
            *channel = (hi << 4) | lo;
        }

        let [r, g, b] = channels;
        Ok(Self::new(r, g, b))
    }

    /// Encode as `#RRGGBB` with uppercase digits
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        self.r
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        self.g
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Channels as an `(r, g, b)` tuple
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// BT.709-weighted brightness in [0, 1], computed on gamma-encoded channels.
    ///
    /// This is not WCAG relative luminance: no linearization is applied.
    #[must_use]
    pub fn luminance(self) -> f64 {
        (LUMA_RED * f64::from(self.r)
            + LUMA_GREEN * f64::from(self.g)
            + LUMA_BLUE * f64::from(self.b))
            / 255.0
    }

    /// True when [`luminance`](Self::luminance) is strictly above
    /// [`LIGHT_LUMINANCE_THRESHOLD`]
    #[must_use]
    pub fn is_light(self) -> bool {
        self.luminance() > LIGHT_LUMINANCE_THRESHOLD
    }

    /// Text tone that stays legible on top of this color
    #[must_use]
    pub fn label_tone(self) -> LabelTone {
        if self.is_light() {
            LabelTone::Dark
        } else {
            LabelTone::Light
        }
    }
}

/// Foreground tone for a label drawn on a colored swatch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelTone {
    /// Black text, used on light backgrounds
    Dark,
    /// White text, used on dark backgrounds
    Light,
}

impl LabelTone {
    /// The text color itself
    #[must_use]
    pub const fn color(self) -> HexColor {
        match self {
            Self::Dark => HexColor::new(0, 0, 0),
            Self::Light => HexColor::new(255, 255, 255),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = HarmonyError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for HexColor {
    type Error = HarmonyError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_hex()
    }
}

impl From<(u8, u8, u8)> for HexColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
