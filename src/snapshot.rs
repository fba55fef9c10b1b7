// Snapshot persistence for the task list

use crate::task::Task;
use fs2::FileExt;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Filename of the snapshot inside the store directory.
pub const SNAPSHOT_FILE: &str = "todos.json";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load the task list from a snapshot file.
///
/// The snapshot is a JSON array of `{text, description, completed}` objects.
/// A missing file, an unreadable file, or a top level that is not an array
/// all degrade to an empty list. Individual entries that don't match the
/// expected shape are skipped, keeping the rest of the snapshot usable.
pub fn load(path: &Path) -> Vec<Task> {
    if !path.exists() {
        debug!(path = %path.display(), "no snapshot file, starting empty");
        return Vec::new();
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read snapshot, starting empty");
            return Vec::new();
        }
    };

    let values: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "snapshot is not a JSON array, starting empty");
            return Vec::new();
        }
    };

    let mut tasks = Vec::with_capacity(values.len());
    for (entry, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<Task>(value) {
            Ok(task) => tasks.push(task),
            Err(e) => {
                warn!(path = %path.display(), entry, error = %e, "skipping malformed snapshot entry");
            }
        }
    }

    debug!(path = %path.display(), count = tasks.len(), "loaded snapshot");
    tasks
}

/// Overwrite the snapshot file with the full task list.
///
/// The write replaces the whole file under an exclusive lock; there is a
/// single writer, so last-write-wins is the intended semantics.
pub fn save(path: &Path, tasks: &[Task]) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    file.lock_exclusive()?;

    let json = serde_json::to_string(tasks)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;

    // Lock is released when file is dropped
    Ok(())
}
