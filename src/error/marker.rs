use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    NoDocument,
    Class(String),
}

impl Display for MarkerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerError::NoDocument => write!(f, "Marker Error: no root element to mark"),
            MarkerError::Class(msg) => write!(f, "Marker Error: {}", msg),
        }
    }
}

impl std::error::Error for MarkerError {}
