//! Hue Harmony CLI Tool
//!
//! Prints complementary, analogous and triadic palettes for a `#RRGGBB` color.

#[cfg(feature = "cli")]
use hue_harmony::cli;

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    cli::main()
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("CLI feature not enabled. Please rebuild with --features cli");
}
