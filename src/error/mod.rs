mod content;
mod marker;
mod storage;

pub use content::ContentError;
pub use marker::MarkerError;
pub use storage::StorageError;
