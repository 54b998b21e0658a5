//! Log entry type for JSONL-based logging.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single log line.
///
/// Self-contained, so a JSONL file stays readable even if the process dies
/// mid-session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonLogEntry {
    /// RFC 3339 timestamp with milliseconds
    pub ts: String,

    /// trace, debug, info, warn or error
    pub level: String,

    /// Which binary wrote the line ("desktop", "cli")
    pub surface: String,

    /// Module path, e.g. "folio_core::workflow"
    pub target: String,

    pub msg: String,

    /// Structured event fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Enclosing spans, outermost first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl JsonLogEntry {
    /// Create a new log entry stamped with the current time.
    pub fn new(
        level: impl Into<String>,
        surface: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            surface: surface.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// One-line human rendering used by `folio logs`
    pub fn render(&self) -> String {
        let mut line = format!(
            "{} {:>5} [{}] {}: {}",
            self.ts,
            self.level.to_uppercase(),
            self.surface,
            self.target,
            self.msg
        );
        if let Some(Value::Object(fields)) = &self.fields {
            for (key, value) in fields {
                match value {
                    Value::String(s) => line.push_str(&format!(" {}={}", key, s)),
                    other => line.push_str(&format!(" {}={}", key, other)),
                }
            }
        }
        line
    }
}
