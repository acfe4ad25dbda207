use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::KeywordSnapshot;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to replace snapshot file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Reads and rewrites the per-keyword identity snapshot, a JSON object
/// mapping each keyword to the sorted ids seen on the last completed run.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// A missing or unreadable snapshot degrades to an empty mapping; worst
    /// case the next run re-notifies, which beats refusing to start.
    pub fn load(&self) -> KeywordSnapshot {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(
                    target: "state",
                    error = %err,
                    path = %self.path.display(),
                    "no previous snapshot, starting empty"
                );
                return KeywordSnapshot::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(
                    target: "state",
                    error = %err,
                    path = %self.path.display(),
                    "snapshot is not valid JSON, starting empty"
                );
                KeywordSnapshot::new()
            }
        }
    }

    /// Replaces the snapshot wholesale. Written to a temp file in the same
    /// directory and renamed over the target, so a crash mid-write leaves the
    /// previous snapshot intact.
    pub fn save(&self, snapshot: &KeywordSnapshot) -> Result<(), StoreError> {
        let serialized = serde_json::to_string_pretty(snapshot)?;
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(serialized.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdSet;

    fn store_in(dir: &tempfile::TempDir) -> SnapshotStore {
        SnapshotStore::new(dir.path().join("last_posts.json"))
    }

    fn sample() -> KeywordSnapshot {
        let mut snapshot = KeywordSnapshot::new();
        snapshot.insert("rust".to_string(), [1u64, 2, 3].into_iter().collect());
        snapshot.insert("tokio".to_string(), IdSet::new());
        snapshot
    }

    #[test]
    fn round_trips_a_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&sample()).unwrap();
        assert_eq!(store.load(), sample());
    }

    #[test]
    fn round_trips_the_empty_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&KeywordSnapshot::new()).unwrap();
        assert_eq!(store.load(), KeywordSnapshot::new());
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load(), KeywordSnapshot::new());
    }

    #[test]
    fn malformed_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join("last_posts.json"), "not json {").unwrap();

        assert_eq!(store.load(), KeywordSnapshot::new());
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&sample()).unwrap();
        let mut replacement = KeywordSnapshot::new();
        replacement.insert("rust".to_string(), [9u64].into_iter().collect());
        store.save(&replacement).unwrap();

        assert_eq!(store.load(), replacement);
    }
}
