//! Shell components of the portfolio page.
//!
//! Presentational pieces (buttons, inputs, swatches, toasts) live in
//! `folio-ui`; the components here talk to the [`ShellContext`].
//!
//! [`ShellContext`]: crate::context::ShellContext

mod base64_tool;
mod contact_form;
mod json_tool;
mod nav_header;
mod notification_host;
mod palette_tool;
mod reveal;
mod skip_link;

pub use base64_tool::Base64Tool;
pub use contact_form::ContactForm;
pub use json_tool::JsonTool;
pub use nav_header::NavHeader;
pub use notification_host::NotificationHost;
pub use palette_tool::PaletteTool;
pub use reveal::Reveal;
pub use skip_link::SkipLink;
