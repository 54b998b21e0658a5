//! JSONL file writer, one file per surface per day.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::JsonLogEntry;

/// Appends log entries to `logs/raw/<date>_<surface>.jsonl`.
pub struct SurfaceLogWriter {
    surface: String,
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl SurfaceLogWriter {
    /// Open (or create) today's file for `surface`, creating `logs/raw/`
    /// if needed.
    pub fn new(logs_dir: impl AsRef<Path>, surface: impl Into<String>) -> std::io::Result<Self> {
        let surface = surface.into();

        let raw_dir = logs_dir.as_ref().join("raw");
        fs::create_dir_all(&raw_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = raw_dir.join(format!("{}_{}.jsonl", date, surface));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            surface,
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry as one line and flush.
    pub fn write(&self, entry: &JsonLogEntry) -> std::io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.writer.lock().flush()
    }
}

impl Drop for SurfaceLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Read every entry under `logs/raw/`, sorted by timestamp.
///
/// Lines that fail to parse are skipped with a warning.
pub fn read_all_entries(logs_dir: impl AsRef<Path>) -> std::io::Result<Vec<JsonLogEntry>> {
    let raw_dir = logs_dir.as_ref().join("raw");

    if !raw_dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(&raw_dir)? {
        let path = dir_entry?.path();
        if path.extension().map(|e| e != "jsonl").unwrap_or(true) {
            continue;
        }

        let content = fs::read_to_string(&path)?;
        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match JsonLogEntry::from_json_line(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping log line"),
            }
        }
    }

    entries.sort_by(|a, b| a.ts.cmp(&b.ts));

    Ok(entries)
}

/// The newest `limit` entries, oldest first
pub fn tail_entries(logs_dir: impl AsRef<Path>, limit: usize) -> std::io::Result<Vec<JsonLogEntry>> {
    let mut entries = read_all_entries(logs_dir)?;
    let skip = entries.len().saturating_sub(limit);
    Ok(entries.split_off(skip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_one_line_per_entry() {
        let temp = TempDir::new().unwrap();
        let writer = SurfaceLogWriter::new(temp.path(), "cli").unwrap();

        writer
            .write(&JsonLogEntry::new("info", "cli", "folio", "first"))
            .unwrap();
        writer
            .write(&JsonLogEntry::new("warn", "cli", "folio", "second"))
            .unwrap();

        let content = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(writer
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .ends_with("_cli.jsonl"));
    }

    #[test]
    fn reads_back_sorted_and_skips_garbage() {
        let temp = TempDir::new().unwrap();
        let raw = temp.path().join("raw");
        fs::create_dir_all(&raw).unwrap();

        let mut late = JsonLogEntry::new("info", "desktop", "folio", "late");
        late.ts = "2026-01-02T00:00:00.000Z".into();
        let mut early = JsonLogEntry::new("info", "cli", "folio", "early");
        early.ts = "2026-01-01T00:00:00.000Z".into();

        fs::write(
            raw.join("a_desktop.jsonl"),
            format!("{}\nnot json\n", late.to_json_line().unwrap()),
        )
        .unwrap();
        fs::write(raw.join("b_cli.jsonl"), early.to_json_line().unwrap()).unwrap();
        fs::write(raw.join("notes.txt"), "ignored").unwrap();

        let entries = read_all_entries(temp.path()).unwrap();
        let msgs: Vec<_> = entries.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(msgs, vec!["early", "late"]);

        let tail = tail_entries(temp.path(), 1).unwrap();
        assert_eq!(tail.len(), 1);
        assert_eq!(tail[0].msg, "late");
    }

    #[test]
    fn missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(read_all_entries(temp.path().join("nope")).unwrap().is_empty());
    }
}
