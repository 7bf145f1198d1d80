use web_sys::Storage;

use super::KeyValueStorage;
use crate::error::StorageError;

/// The browser's `window.localStorage`.
///
/// The handle is looked up on every call so a storage area that is disabled
/// (private browsing, sandboxed frames) degrades into `Unavailable` errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn area(&self) -> Result<Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.area()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.area()?
            .set_item(key, value)
            .map_err(|e: wasm_bindgen::JsValue| StorageError::Write(format!("{:?}", e)))
    }
}
