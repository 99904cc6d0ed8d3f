//! Path management for the ledger engine
//!
//! Resolution order:
//!
//! 1. `POCKET_LEDGER_DATA_DIR` environment variable (explicit override)
//! 2. Platform data directory via the `directories` crate
//!    (e.g. `~/.local/share/pocket-ledger` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Manages all paths used by the engine
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = if let Ok(custom) = std::env::var("POCKET_LEDGER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "pocket-ledger")
                .ok_or_else(|| {
                    LedgerError::Config("Could not determine a data directory".into())
                })?
                .data_dir()
                .to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// The ledger snapshot file
    pub fn snapshot_file(&self) -> PathBuf {
        self.base_dir.join("ledger.json")
    }

    /// The settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }
}
