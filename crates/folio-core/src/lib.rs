//! Folio Core Library
//!
//! The logic behind a single-page portfolio: contact-form validation,
//! the submission workflow, HSL palette generation and the small developer
//! tools embedded in the page.
//!
//! ## Overview
//!
//! Everything in this crate is pure or driven by an explicit clock. The UI
//! shell (the desktop app or the CLI) collects raw input, calls into the
//! core and renders what comes back. Deferred work such as the simulated
//! submit latency or toast auto-dismiss goes through a [`Scheduler`], so
//! tests can drive time by hand.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{generate_palette, validate, Field, SubmissionWorkflow, SubmitOutcome};
//! use std::time::Duration;
//!
//! assert!(validate("email", "a@b.com").valid);
//!
//! let palette = generate_palette("#336699").unwrap();
//! assert_eq!(palette.len(), 8);
//!
//! let mut workflow = SubmissionWorkflow::new(Duration::from_millis(2000));
//! let fields = vec![
//!     Field::new("name", "Ada"),
//!     Field::new("email", "ada@example.com"),
//!     Field::new("message", "Hello there, nice portfolio!"),
//! ];
//! match workflow.submit(&fields) {
//!     SubmitOutcome::Accepted { ticket, .. } => {
//!         let done = workflow.complete(ticket).unwrap();
//!         assert!(done.clear_fields);
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod notify;
pub mod palette;
pub mod scheduler;
pub mod sections;
pub mod timing;
pub mod tools;
pub mod validation;
pub mod workflow;

// Re-exports
pub use config::FolioConfig;
pub use error::{FolioError, FolioResult};
pub use notify::{Notification, NotificationCenter, NotificationId, NotificationPhase, Severity};
pub use palette::{
    generate_palette, hex_to_hsl, hsl_to_hex, is_hex_color, random_color, Hsl, Palette,
    PaletteRole, Rgb, Swatch,
};
pub use scheduler::{ManualScheduler, Scheduler};
pub use sections::{
    FocusMode, RevealPlan, SectionLayout, SectionTracker, Viewport, DEFAULT_SECTIONS,
};
pub use timing::{Debounce, Gate, Throttle};
pub use tools::{StatusKind, ToolStatus};
pub use validation::{
    validate, AriaLive, Decoration, Field, FieldFeedback, FieldId, FormState, ValidationResult,
};
pub use workflow::{
    run_workflow, Completion, Failure, SubmissionTicket, SubmissionWorkflow, SubmitOutcome,
    Verdict, WorkflowState, SUCCESS_MESSAGE,
};
