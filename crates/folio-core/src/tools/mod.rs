//! Developer tools embedded in the page: JSON formatter and Base64 codec.
//!
//! Each tool returns `FolioResult<String>`; [`ToolStatus`] turns either
//! side into the status line shown under the tool.

pub mod base64;
pub mod json;

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Cleared; nothing to show
    #[default]
    Idle,
    Success,
    Error,
}

impl StatusKind {
    /// CSS classes of the status line
    pub fn class(&self) -> &'static str {
        match self {
            StatusKind::Idle => "tool-status",
            StatusKind::Success => "tool-status success",
            StatusKind::Error => "tool-status error",
        }
    }
}

/// Status line under a tool
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToolStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl ToolStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    /// Status after the tool's Clear button
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Map a tool result to `(output, status)`.
    ///
    /// On failure the output is `None`; callers that blank the output box
    /// on error (the JSON tool) do so, the Base64 tool leaves it alone.
    pub fn report(result: FolioResult<String>, success: &str) -> (Option<String>, Self) {
        match result {
            Ok(output) => (Some(output), Self::success(success)),
            Err(err) => (None, Self::error(err.to_string())),
        }
    }
}
