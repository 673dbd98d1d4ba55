//! Persistence collaborator for the state snapshot.
//!
//! The snapshot is one JSON document behind a synchronous get/set surface.
//! What the document contains is the business of [`crate::state`]; storage
//! only moves strings.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::StorageError;

/// Name of the snapshot file inside the data directory.
pub const STATE_FILE: &str = "hydration.json";

/// A place the serialized state can be read from and written to.
pub trait StateStorage {
    /// Loads the snapshot.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet; that is not an
    /// error.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replaces the snapshot.
    fn save(&self, snapshot: &str) -> Result<(), StorageError>;
}

/// Snapshot storage backed by a single file in the data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Full path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE)
    }

    /// Whether a snapshot exists on disk.
    pub fn exists(&self) -> bool {
        self.path().exists()
    }
}

impl StateStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(path, e)),
        }
    }

    fn save(&self, snapshot: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::Io(self.data_dir.clone(), e))?;

        let path = self.path();
        fs::write(&path, snapshot).map_err(|e| StorageError::Io(path, e))?;
        Ok(())
    }
}

/// In-memory snapshot storage for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage seeded with an existing snapshot.
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(snapshot.into())),
        }
    }

    /// The last saved snapshot, if any.
    pub fn snapshot(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, snapshot: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(snapshot.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_storage() -> (FileStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().to_path_buf());
        (storage, temp_dir)
    }

    #[test]
    fn test_storage_path() {
        let (storage, _temp) = test_storage();
        assert!(storage.path().ends_with("hydration.json"));
    }

    #[test]
    fn test_load_nonexistent_returns_none() {
        let (storage, _temp) = test_storage();
        assert!(storage.load().unwrap().is_none());
        assert!(!storage.exists());
    }

    #[test]
    fn test_save_then_load() {
        let (storage, _temp) = test_storage();
        storage.save(r#"{"targetAmount":2500}"#).unwrap();

        assert!(storage.exists());
        assert_eq!(storage.load().unwrap().unwrap(), r#"{"targetAmount":2500}"#);
    }

    #[test]
    fn test_save_creates_missing_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("nested").join("dir"));

        storage.save("{}").unwrap();
        assert!(storage.exists());
    }

    #[test]
    fn test_save_overwrites() {
        let (storage, _temp) = test_storage();
        storage.save("first").unwrap();
        storage.save("second").unwrap();

        assert_eq!(storage.load().unwrap().unwrap(), "second");
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        storage.save("snapshot").unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), "snapshot");
        assert_eq!(storage.snapshot().unwrap(), "snapshot");
    }

    #[test]
    fn test_memory_storage_seeded() {
        let storage = MemoryStorage::with_snapshot("seeded");
        assert_eq!(storage.load().unwrap().unwrap(), "seeded");
    }
}
