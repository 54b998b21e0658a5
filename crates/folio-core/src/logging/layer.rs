//! Tracing layer that writes events to a surface's JSONL file.

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use super::entry::JsonLogEntry;
use super::writer::SurfaceLogWriter;

/// A tracing Layer that appends every event as a JSON line.
pub struct JsonlLayer {
    writer: Arc<SurfaceLogWriter>,
}

impl JsonlLayer {
    /// # Arguments
    /// * `logs_dir` - Directory for log files (e.g., "<data-dir>/logs")
    /// * `surface` - Name of the writing binary (e.g., "desktop")
    pub fn new(logs_dir: impl AsRef<Path>, surface: impl Into<String>) -> std::io::Result<Self> {
        let writer = SurfaceLogWriter::new(logs_dir, surface)?;
        Ok(Self {
            writer: Arc::new(writer),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }

    pub fn surface(&self) -> &str {
        self.writer.surface()
    }
}

impl<S> Layer<S> for JsonlLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = metadata.level().as_str().to_lowercase();

        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let mut entry = JsonLogEntry::new(
            level,
            self.writer.surface(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        // Logging must never take the UI down.
        let _ = self.writer.write(&entry);
    }
}

/// Collects the message and fields of one event.
#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.insert(field, serde_json::Value::Number(n));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, serde_json::Value::String(value.to_string()));
    }
}

/// Builds the subscriber stack used by the Folio binaries: console output
/// filtered by `RUST_LOG` (or a default directive) plus the JSONL layer.
pub struct LoggingBuilder {
    logs_dir: PathBuf,
    surface: String,
    default_filter: String,
}

impl LoggingBuilder {
    pub fn new(logs_dir: impl Into<PathBuf>, surface: impl Into<String>) -> Self {
        Self {
            logs_dir: logs_dir.into(),
            surface: surface.into(),
            default_filter: "info".to_string(),
        }
    }

    /// Directive used when `RUST_LOG` is unset (e.g. "folio=debug,warn").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Build the JSONL layer alone, for manual composition.
    pub fn build_layer(&self) -> std::io::Result<JsonlLayer> {
        JsonlLayer::new(&self.logs_dir, &self.surface)
    }

    /// Install the global subscriber.
    ///
    /// Returns the JSONL path. If another subscriber is already installed
    /// this one is dropped silently.
    pub fn init(self) -> std::io::Result<PathBuf> {
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::EnvFilter;

        let jsonl = self.build_layer()?;
        let path = jsonl.log_path().to_path_buf();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_filter));
        let console = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(jsonl)
            .with(console)
            .try_init();

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tracing_subscriber::prelude::*;

    #[test]
    fn test_jsonl_layer_captures_events() {
        let temp = TempDir::new().unwrap();
        let logs_dir = temp.path().join("logs");

        let layer = JsonlLayer::new(&logs_dir, "test").unwrap();
        let log_path = layer.log_path().to_path_buf();

        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("palette generated");
            tracing::warn!(errors = 2, field = "email", "submission rejected");
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<_> = content.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("palette generated"));
        assert!(lines[0].contains("\"level\":\"info\""));
        assert!(lines[0].contains("\"surface\":\"test\""));
        assert!(lines[1].contains("submission rejected"));
        assert!(lines[1].contains("\"errors\":2"));
        assert!(lines[1].contains("\"field\":\"email\""));
    }

    #[test]
    fn test_span_names_are_recorded() {
        let temp = TempDir::new().unwrap();
        let layer = JsonlLayer::new(temp.path(), "test").unwrap();
        let log_path = layer.log_path().to_path_buf();

        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            let _outer = tracing::info_span!("contact_form").entered();
            let _inner = tracing::info_span!("submit").entered();
            tracing::info!("validating");
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("\"span\":\"contact_form > submit\""));
    }

    #[test]
    fn test_builder_layer_targets_surface_in_logs_dir() {
        let temp = TempDir::new().unwrap();
        let logs_dir = temp.path().join("logs");

        let layer = LoggingBuilder::new(&logs_dir, "desktop")
            .with_filter("folio=debug")
            .build_layer()
            .unwrap();

        assert_eq!(layer.surface(), "desktop");
        assert!(layer.log_path().starts_with(&logs_dir));
    }
}
