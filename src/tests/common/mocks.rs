use std::cell::{ Cell, RefCell };

use crate::error::{ MarkerError, StorageError };
use crate::storage::KeyValueStorage;
use crate::theme::ThemeMarker;

/// Storage that rejects every read and write.
#[derive(Debug, Default)]
pub struct FailingStorage {
    pub writes: Cell<usize>,
}

impl KeyValueStorage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read("quota exceeded".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        Err(StorageError::Write("quota exceeded".to_string()))
    }
}

/// Marker that remembers every value it was set to.
#[derive(Debug, Default)]
pub struct RecordingMarker {
    history: RefCell<Vec<bool>>,
}

impl RecordingMarker {
    pub fn is_marked(&self) -> Option<bool> {
        self.history.borrow().last().copied()
    }

    pub fn history(&self) -> Vec<bool> {
        self.history.borrow().clone()
    }
}

impl ThemeMarker for RecordingMarker {
    fn set_marked(&self, present: bool) -> Result<(), MarkerError> {
        self.history.borrow_mut().push(present);
        Ok(())
    }
}
