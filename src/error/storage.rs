use std::fmt::{ Display, Formatter };

/// Failures raised by a [`KeyValueStorage`](crate::storage::KeyValueStorage) backend.
///
/// None of these ever reach the UI: the theme store logs them and keeps
/// running on its in-memory value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Unavailable,
    Read(String),
    Write(String),
    Io(String),
    Format(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage Error: storage is unavailable"),
            StorageError::Read(msg) => write!(f, "Storage Read Error: {}", msg),
            StorageError::Write(msg) => write!(f, "Storage Write Error: {}", msg),
            StorageError::Io(msg) => write!(f, "Storage I/O Error: {}", msg),
            StorageError::Format(msg) => write!(f, "Storage Format Error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Format(error.to_string())
    }
}
