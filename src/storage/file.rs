//! Durable storage in a JSON file
//!
//! The file holds a single JSON object mapping keys to stored strings.
//! Writes go to a sibling temporary file that is then renamed over the
//! original, so a crash never leaves a half-written store behind.

use super::Storage;
use crate::error::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use the store at `path`; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let written = fs::write(&tmp, serde_json::to_string_pretty(values)?)
            .and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut values = self.load()?;
        Ok(values.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)?;
        debug!(path = %self.path.display(), key, "wrote game state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("state.json"));
        assert_eq!(storage.read("days[1]").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut storage = FileStorage::new(&path);
        storage.write("days[1]", "one").unwrap();
        storage.write("days[2]", "two").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.read("days[1]").unwrap().as_deref(), Some("one"));
        assert_eq!(reopened.read("days[2]").unwrap().as_deref(), Some("two"));
        assert_eq!(reopened.read("days[3]").unwrap(), None);
    }

    #[test]
    fn overwrite_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("state.json"));
        storage.write("a", "1").unwrap();
        storage.write("b", "2").unwrap();
        storage.write("a", "3").unwrap();

        assert_eq!(storage.read("a").unwrap().as_deref(), Some("3"));
        assert_eq!(storage.read("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.read("a"),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn failed_rename_removes_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        // A non-empty directory cannot be replaced by a file
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        let storage = FileStorage::new(&path);
        let result = storage.save(&BTreeMap::from([("a".to_string(), "1".to_string())]));

        assert!(matches!(result, Err(StorageError::Io(_))));
        assert!(!dir.path().join("state.json.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn empty_file_reads_as_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "").unwrap();

        assert_eq!(FileStorage::new(&path).read("a").unwrap(), None);
    }
}
