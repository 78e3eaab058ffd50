//! Document input model

use crate::error::{EngineError, Result};
use std::fs;
use std::path::Path;

/// One source document: an identifier plus its plain text
///
/// Immutable once constructed; the pipeline driver owns it transiently
/// for the duration of one extraction pass. Retrieval and markup
/// conversion happen upstream — the text here is expected to be the
/// plain-text form, one unit per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Source identifier (file path, revision id, ...)
    pub id: String,
    /// Plain text content, newline-delimited units
    pub text: String,
}

impl RawDocument {
    /// Create a document from its parts
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Read a document from a UTF-8 file, using the path as identifier
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            EngineError::IoError(format!("failed to read {}: {e}", path.display()))
        })?;
        Ok(Self::new(path.display().to_string(), text))
    }
}
