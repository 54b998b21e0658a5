//! Reusable UI components
//!
//! Class names match the page stylesheet in the desktop shell.

mod button;
mod input;
mod swatch;
mod toast;
mod tool_status;

pub use button::*;
pub use input::*;
pub use swatch::*;
pub use toast::*;
pub use tool_status::*;
