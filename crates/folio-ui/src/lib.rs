//! Folio UI Components
//!
//! Dioxus building blocks for the portfolio page. They render state that
//! `folio-core` computes and report user intent back through event
//! handlers; none of them hold application state of their own.
//!
//! ## Accessibility
//!
//! - Every form input owns an error region (`{id}-error`) whose
//!   `aria-live` policy comes from [`folio_core::FieldFeedback`]
//! - Toasts are `role="alert"` with a labelled close button
//! - Swatches are buttons, so they can be copied from the keyboard

pub mod components;

pub use components::*;
