use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{ Path, PathBuf };

use super::KeyValueStorage;
use crate::error::StorageError;

/// A flat JSON object on disk, `{ "theme": "light" }`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // a corrupt file is replaced rather than blocking every later write
        let mut entries = self.load().unwrap_or_else(|e| {
            log::warn!("Replacing unreadable preferences file: {}", e);
            Default::default()
        });
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, raw)?;
        log::debug!("Wrote preferences to {}", self.path.display());
        Ok(())
    }
}
