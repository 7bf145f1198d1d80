//! Key-value persistence backends for user preferences.

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;
mod memory;

use std::rc::Rc;

use crate::error::StorageError;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
pub use memory::MemoryStorage;

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Backend for contexts without any persistence at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl KeyValueStorage for Unavailable {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Picks the persistence backend for the current target.
pub fn platform_storage() -> Rc<dyn KeyValueStorage> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match crate::configs::prefs_path() {
            Some(path) => Rc::new(FileStorage::new(path)),
            None => Rc::new(Unavailable),
        }
    }
}
