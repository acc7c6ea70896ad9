//! Path management for the journal form
//!
//! ## Path Resolution Order
//!
//! 1. `JOURNAL_FORM_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/journal-form` or `~/.config/journal-form`
//! 3. Windows: `%APPDATA%\journal-form`

use std::path::PathBuf;

use crate::error::JournalError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "JOURNAL_FORM_DATA_DIR";

/// Manages all paths used by the journal form
#[derive(Debug, Clone)]
pub struct JournalPaths {
    /// Base directory for all data
    base_dir: PathBuf,
}

impl JournalPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, JournalError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create JournalPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default submission outbox (one JSON entry per line)
    pub fn outbox_file(&self) -> PathBuf {
        self.base_dir.join("outbox.jsonl")
    }

    /// Get the path to the application log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("journal.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), JournalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| JournalError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, JournalError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("journal-form"));
        }
    }
    let home = std::env::var("HOME")
        .map_err(|_| JournalError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("journal-form"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, JournalError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| JournalError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("journal-form"))
}
