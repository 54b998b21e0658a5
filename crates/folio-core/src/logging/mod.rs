//! JSONL logging for the Folio binaries.
//!
//! Each surface (the desktop app, the CLI) appends its `tracing` events to
//! its own JSONL file under the data directory, one file per day:
//!
//! ```text
//! logs/
//! └── raw/
//!     ├── 2026-10-19_desktop.jsonl
//!     └── 2026-10-19_cli.jsonl
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use folio_core::logging::JsonlLayer;
//! use tracing_subscriber::prelude::*;
//!
//! let jsonl_layer = JsonlLayer::new("./logs", "desktop")?;
//!
//! let subscriber = tracing_subscriber::registry()
//!     .with(jsonl_layer)
//!     .with(tracing_subscriber::fmt::layer());
//!
//! tracing::subscriber::set_global_default(subscriber)?;
//! ```
//!
//! ### Querying logs with jq
//!
//! ```bash
//! # Every rejected submission
//! jq 'select(.msg == "submission rejected")' logs/raw/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

// Re-exports for convenience
pub use entry::JsonLogEntry;
pub use layer::{JsonlLayer, LoggingBuilder};
pub use writer::{read_all_entries, tail_entries, SurfaceLogWriter};
