//! Runtime configuration.
//!
//! Every setting has a default matching the page's reference timings, so a
//! missing or partial `folio.json` is fine.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Config file name looked up in the data directory
pub const CONFIG_FILE: &str = "folio.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Simulated contact-form submit latency
    pub submit_delay_ms: u64,
    /// Toast auto-dismiss delay
    pub notification_timeout_ms: u64,
    /// Toast slide-out transition
    pub notification_exit_ms: u64,
    /// Delay between consecutive reveals within a section
    pub reveal_stagger_ms: u64,
    /// Minimum spacing between handled scroll events
    pub scroll_throttle_ms: u64,
    /// Quiet period before the palette hex box is applied
    pub hex_debounce_ms: u64,
    /// Observation line as a fraction of viewport height
    pub observer_band: f64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            notification_timeout_ms: 5000,
            notification_exit_ms: 300,
            reveal_stagger_ms: 100,
            scroll_throttle_ms: 100,
            hex_debounce_ms: 250,
            observer_band: 0.2,
        }
    }
}

impl FolioConfig {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.check()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `<data_dir>/folio.json`, or defaults when it does not exist
    pub fn load_or_default(data_dir: impl AsRef<Path>) -> FolioResult<Self> {
        let path = data_dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn check(&self) -> FolioResult<()> {
        if !(0.0..=1.0).contains(&self.observer_band) {
            return Err(FolioError::Config(format!(
                "observer_band must be within 0..=1, got {}",
                self.observer_band
            )));
        }
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }

    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }

    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    pub fn hex_debounce(&self) -> Duration {
        Duration::from_millis(self.hex_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_reference_timings() {
        let config = FolioConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_millis(2000));
        assert_eq!(config.notification_timeout(), Duration::from_millis(5000));
        assert_eq!(config.notification_exit(), Duration::from_millis(300));
        assert_eq!(config.reveal_stagger(), Duration::from_millis(100));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = FolioConfig::load_or_default(temp.path()).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), r#"{"submit_delay_ms": 10}"#).unwrap();

        let config = FolioConfig::load_or_default(temp.path()).unwrap();
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.notification_timeout_ms, 5000);
    }

    #[test]
    fn rejects_out_of_range_band() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"observer_band": 1.5}"#).unwrap();

        assert!(matches!(FolioConfig::load(&path), Err(FolioError::Config(_))));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            FolioConfig::load(&path),
            Err(FolioError::Serialization(_))
        ));
    }
}
