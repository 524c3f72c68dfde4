//! Local working-tree content source
//!
//! Implements `ContentSource` by reading files relative to a root
//! directory, typically a checked-out repository.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::core::ports::{ContentSource, FetchError};

/// Reads repository files from disk
#[derive(Debug, Clone)]
pub struct LocalContentSource {
    root: PathBuf,
}

impl LocalContentSource {
    /// Create a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for LocalContentSource {
    fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let full = self.root.join(path);
        match fs::read_to_string(&full) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FetchError::NotFound(path.to_string())),
            Err(e) => Err(FetchError::Other(
                anyhow::Error::new(e).context(format!("failed to read {}", full.display())),
            )),
        }
    }
}
