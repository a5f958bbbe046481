//! Create-only writer for stored files.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// A freshly created file that did not exist before `create`.
///
/// Dropping the writer without calling [`StoredFileWriter::finish`] removes the
/// file, so a failed copy never leaves a truncated upload behind.
pub struct StoredFileWriter {
    file: Option<File>,
    path: PathBuf,
}

impl StoredFileWriter {
    /// Create `path` exclusively. Fails with `ErrorKind::AlreadyExists` if
    /// anything is already there; never truncates.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::options().write(true).create_new(true).open(path)?;
        Ok(StoredFileWriter {
            file: Some(file),
            path: path.to_path_buf(),
        })
    }

    /// Stream `reader` into the file. Returns the number of bytes copied.
    pub fn copy_from<R: Read + ?Sized>(&mut self, reader: &mut R) -> io::Result<u64> {
        match self.file.as_mut() {
            Some(file) => io::copy(reader, file),
            None => Err(io::Error::new(io::ErrorKind::Other, "writer already finished")),
        }
    }

    /// Flush and sync to disk, then keep the file.
    pub fn finish(mut self) -> io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
            file.sync_all()?;
        }
        Ok(())
    }
}

impl Drop for StoredFileWriter {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            drop(file);
            if let Err(e) = std::fs::remove_file(&self.path) {
                tracing::warn!(path = %self.path.display(), "could not remove partial file: {}", e);
            }
        }
    }
}
