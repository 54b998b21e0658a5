//! Theme for the Folio desktop app.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
