//! JSON formatter / minifier / validator.
//!
//! Object keys keep their input order. Pretty output uses two-space
//! indentation.

use serde_json::Value;

use crate::error::{FolioError, FolioResult};

pub const FORMAT_PROMPT: &str = "Please enter some JSON to format.";
pub const VALIDATE_PROMPT: &str = "Please enter some JSON to validate.";

pub const FORMATTED: &str = "JSON formatted successfully!";
pub const MINIFIED: &str = "JSON minified successfully!";
pub const VALID: &str = "Valid JSON! ✅";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    Pretty,
    Minified,
}

impl JsonStyle {
    /// Status message on success
    pub fn success_message(&self) -> &'static str {
        match self {
            JsonStyle::Pretty => FORMATTED,
            JsonStyle::Minified => MINIFIED,
        }
    }
}

fn parse(input: &str, prompt: &'static str) -> FolioResult<Value> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FolioError::EmptyInput(prompt));
    }
    serde_json::from_str(input).map_err(FolioError::InvalidJson)
}

/// Re-serialize JSON text in the given style
pub fn format_json(input: &str, style: JsonStyle) -> FolioResult<String> {
    let value = parse(input, FORMAT_PROMPT)?;
    let output = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(&value)?,
        JsonStyle::Minified => serde_json::to_string(&value)?,
    };
    Ok(output)
}

/// Check that the text parses, returning the success message
pub fn validate_json(input: &str) -> FolioResult<&'static str> {
    parse(input, VALIDATE_PROMPT).map(|_| VALID)
}
