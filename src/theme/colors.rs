//! Color constants of the portfolio theme.
//!
//! The stylesheet mirrors these as CSS custom properties; Rust code uses
//! them where a color is chosen at runtime.

/// Brand color, `--primary-color` in the stylesheet
pub const PRIMARY: &str = "#2563eb";

/// Initial base color of the palette tool
pub const DEFAULT_BASE_COLOR: &str = PRIMARY;
