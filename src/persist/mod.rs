//! Snapshot persistence
//!
//! The store treats persistence as a pluggable sink behind [`SnapshotStore`].
//! The bundled [`JsonSnapshotStore`] writes the whole snapshot as one JSON
//! document using a write-to-temp-then-rename sequence, so a crash mid-save
//! leaves either the old file or the new one, never a torn mix.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::store::LedgerSnapshot;

/// A destination for committed ledger snapshots
pub trait SnapshotStore {
    /// Load the persisted snapshot, or `None` when nothing has been saved
    fn load(&self) -> LedgerResult<Option<LedgerSnapshot>>;

    /// Persist the snapshot, replacing any previous one
    fn save(&self, snapshot: &LedgerSnapshot) -> LedgerResult<()>;
}

/// Snapshot store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> LedgerResult<Option<LedgerSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            LedgerError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let snapshot = serde_json::from_str(&contents).map_err(|e| {
            LedgerError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &LedgerSnapshot) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        let temp_path = self.path.with_extension("json.tmp");

        let mut file = File::create(&temp_path).map_err(|e| {
            LedgerError::Storage(format!("Failed to create {}: {}", temp_path.display(), e))
        })?;
        file.write_all(json.as_bytes())
            .map_err(|e| LedgerError::Storage(format!("Failed to write snapshot: {}", e)))?;
        file.sync_all()
            .map_err(|e| LedgerError::Storage(format!("Failed to sync snapshot: {}", e)))?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to move snapshot into place at {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}
