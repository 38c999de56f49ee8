//! Error types for quire operations.
//!
//! Rendering itself never fails. These errors come from the surfaces that
//! load document trees and options (JSON, files, the CLI).

use thiserror::Error;

/// Errors that can occur while loading a document tree or render options.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl Error {
    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::InvalidDocument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            Error::invalid_document("top-level node must be root").to_string(),
            "Invalid document: top-level node must be root"
        );

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        assert!(Error::from(io).to_string().starts_with("I/O error:"));
    }
}
