//! Input validation utilities
//!
//! Front ends run user text through [`InputValidator`] before handing it to
//! the codec. The shape check here repeats part of the codec's own
//! validation; both layers enforce the format independently.

use crate::{
    color::HexColor,
    error::{HarmonyError, Result},
};

/// Required length of a hex color including the leading `#`
pub const HEX_INPUT_LEN: usize = 7;

/// Validator for free-text color input
pub struct InputValidator;

impl InputValidator {
    /// Trim and upper-case raw input, then check it is 7 characters
    /// starting with `#`.
    ///
    /// Digits are not checked here; that is left to [`HexColor::parse`].
    pub fn sanitize_hex_input(raw: &str) -> Result<String> {
        let clean = raw.trim().to_uppercase();

        if !clean.starts_with('#') || clean.chars().count() != HEX_INPUT_LEN {
            return Err(HarmonyError::invalid_format(format!(
                "hex code must be a {}-character string starting with '#' (e.g. #AABBCC), got '{}'",
                HEX_INPUT_LEN, clean
            )));
        }

        Ok(clean)
    }

    /// Sanitize then parse user input
    pub fn parse_user_color(raw: &str) -> Result<HexColor> {
        let clean = Self::sanitize_hex_input(raw)?;
        HexColor::parse(&clean)
    }

    /// Reject non-finite hue offsets
    pub fn validate_offsets(offsets: &[f64]) -> Result<()> {
        match offsets.iter().find(|d| !d.is_finite()) {
            Some(&bad) => Err(HarmonyError::InvalidOffset(bad)),
            None => Ok(()),
        }
    }
}
