//! Page components for Folio.

mod content;
mod portfolio;

pub use portfolio::Portfolio;
