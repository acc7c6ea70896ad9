//! User settings for the journal form
//!
//! Currency symbol, timing of notifications and the submission
//! fallback, and an optional outbox location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::paths::JournalPaths;
use crate::error::JournalError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in totals and alerts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Seconds a notification stays on screen
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// Seconds before a submit without response is re-enabled
    #[serde(default = "default_submit_timeout_secs")]
    pub submit_timeout_secs: u64,

    /// Where submitted entries are written (defaults to the data directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbox_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_notification_secs() -> u64 {
    5
}

fn default_submit_timeout_secs() -> u64 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            notification_secs: default_notification_secs(),
            submit_timeout_secs: default_submit_timeout_secs(),
            outbox_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &JournalPaths) -> Result<Self, JournalError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| JournalError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                JournalError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &JournalPaths) -> Result<(), JournalError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| JournalError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| JournalError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Outbox path, honouring the override
    pub fn outbox_path(&self, paths: &JournalPaths) -> PathBuf {
        self.outbox_file
            .clone()
            .unwrap_or_else(|| paths.outbox_file())
    }

    /// Notification lifetime
    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    /// Submit re-enable fallback
    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }
}
