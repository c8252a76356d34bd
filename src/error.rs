//! Error types for palette generation

use thiserror::Error;

/// Result type alias for palette operations
pub type Result<T> = std::result::Result<T, HarmonyError>;

/// Error types for hex parsing, hue rotation and palette rendering
#[derive(Error, Debug)]
pub enum HarmonyError {
    /// Input is not a well-formed `#RRGGBB` color
    #[error("Invalid hex color format: {0}")]
    InvalidFormat(String),

    /// A channel handed to the checked constructor is outside 0-255
    #[error("Channel {channel} out of range: {value} (valid range: 0-255)")]
    ChannelOutOfRange { channel: char, value: i64 },

    /// Hue offset is NaN or infinite
    #[error("Invalid hue offset: {0} (must be a finite number of degrees)")]
    InvalidOffset(f64),

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing rendered output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HarmonyError {
    /// Create a new invalid format error
    pub fn invalid_format<S: Into<String>>(msg: S) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a channel range error for the named channel (`'R'`, `'G'` or `'B'`)
    pub fn channel_out_of_range(channel: char, value: i64) -> Self {
        Self::ChannelOutOfRange { channel, value }
    }

    /// Create hex format error quoting the rejected input and the reason
    pub fn hex_format_error(input: &str, reason: &str) -> Self {
        Self::InvalidFormat(format!(
            "'{}' {} (expected #RRGGBB, e.g. #4682B4)",
            input, reason
        ))
    }

    /// Create configuration error with valid ranges
    pub fn config_value_error<T: std::fmt::Display>(
        parameter: &str,
        value: T,
        valid_range: &str,
    ) -> Self {
        Self::InvalidConfig(format!(
            "Invalid {}: {} (valid range: {})",
            parameter, value, valid_range
        ))
    }

    /// True for errors caused by user input rather than the environment
    pub fn is_user_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat(_)
                | Self::ChannelOutOfRange { .. }
                | Self::InvalidOffset(_)
                | Self::InvalidConfig(_)
        )
    }
}
