//! Durable snapshot of the aggregate resume state.
//!
//! The snapshot is a single key holding the whole state as JSON. Saving
//! overwrites it wholesale; loading never fails and falls back to an empty
//! resume when the snapshot is missing or unreadable. One writer at a time.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::store::ResumeState;

/// File name used under the platform data directory.
pub const SNAPSHOT_FILENAME: &str = "resume-state.json";

/// Single-key durable storage for the serialized state.
pub trait SnapshotStore {
    /// Returns the stored snapshot, or `None` when nothing has been saved.
    fn read(&self) -> Result<Option<String>>;

    fn write(&self, contents: &str) -> Result<()>;

    fn remove(&self) -> Result<()>;
}

/// Snapshot kept in a JSON file, written atomically (temp file + rename).
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to read snapshot {}", self.path.display())
            }),
        }
    }

    fn write(&self, contents: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).context("Failed to create snapshot directory")?;

        let mut temp =
            tempfile::NamedTempFile::new_in(&dir).context("Failed to create snapshot temp file")?;
        temp.write_all(contents.as_bytes())
            .context("Failed to write snapshot temp file")?;
        temp.persist(&self.path)
            .with_context(|| format!("Failed to replace snapshot {}", self.path.display()))?;

        debug!("Wrote snapshot to {}", self.path.display());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to remove snapshot {}", self.path.display())
            }),
        }
    }
}

/// Snapshot held in memory; nothing survives the process.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    contents: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.contents.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
impl SnapshotStore for MemorySnapshotStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.slot().clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        *self.slot() = Some(contents.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

/// Rehydrates the state from `store`, or returns an empty resume.
pub fn load(store: &dyn SnapshotStore) -> ResumeState {
    let contents = match store.read() {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            debug!("No snapshot found, starting empty");
            return ResumeState::default();
        }
        Err(e) => {
            warn!("Snapshot unreadable, starting empty: {e:#}");
            return ResumeState::default();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(state) => state,
        Err(e) => {
            warn!("Snapshot corrupt, starting empty: {e}");
            ResumeState::default()
        }
    }
}

/// Overwrites the snapshot with the full `state`.
pub fn save(store: &dyn SnapshotStore, state: &ResumeState) -> Result<()> {
    let json = serde_json::to_string(state).context("Failed to serialize resume state")?;
    store.write(&json)
}

/// Deletes the snapshot; the next `load` yields an empty resume.
pub fn clear(store: &dyn SnapshotStore) -> Result<()> {
    store.remove()
}
