//! Unwritten file data submitted in one upload call.

use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// An in-memory handle to file bytes that have not been stored yet.
///
/// Consumed by a single upload call; `size_bytes` is what validation checks,
/// `content` is what gets written.
pub struct UploadCandidate {
    pub original_name: String,
    pub size_bytes: u64,
    pub content: Box<dyn Read + Send>,
}

impl UploadCandidate {
    pub fn from_reader(
        original_name: impl Into<String>,
        size_bytes: u64,
        content: impl Read + Send + 'static,
    ) -> Self {
        Self {
            original_name: original_name.into(),
            size_bytes,
            content: Box::new(content),
        }
    }

    pub fn from_bytes(original_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self::from_reader(original_name, size, Cursor::new(bytes))
    }

    /// Opens a file on disk; the name is its last path component.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let size = file
            .metadata()
            .with_context(|| format!("stat {}", path.display()))?
            .len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::from_reader(name, size, file))
    }

    pub fn is_empty(&self) -> bool {
        self.size_bytes == 0
    }
}

impl fmt::Debug for UploadCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadCandidate")
            .field("original_name", &self.original_name)
            .field("size_bytes", &self.size_bytes)
            .finish_non_exhaustive()
    }
}
