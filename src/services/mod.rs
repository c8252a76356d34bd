//! Service layer
//!
//! Presentation concerns kept separate from the color arithmetic.

pub mod render;

pub use render::{ansi_bg, ansi_fg, PaletteRenderer};
