//! Disk I/O for stored files.
//!
//! Directories are created on demand; files are written with create-only
//! semantics and synced before they count as stored.

mod writer;

pub use writer::StoredFileWriter;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::UploadError;

/// Result of a create-only write.
#[derive(Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File created; carries the number of bytes written.
    Written(u64),
    /// A file with that name appeared before the write; nothing was touched.
    Exists,
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), UploadError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| UploadError::storage(dir, e))?;
    tracing::debug!(dir = %dir.display(), "created upload directory");
    Ok(())
}

/// Write everything from `reader` to a new file at `path`.
///
/// Never overwrites: an existing file yields [`WriteOutcome::Exists`] so the
/// caller can pick another name. Any other failure is a storage error and the
/// partial file is removed.
pub fn write_new<R: Read + ?Sized>(path: &Path, reader: &mut R) -> Result<WriteOutcome, UploadError> {
    let mut writer = match StoredFileWriter::create(path) {
        Ok(w) => w,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(WriteOutcome::Exists),
        Err(e) => return Err(UploadError::storage(path, e)),
    };
    let written = writer
        .copy_from(reader)
        .map_err(|e| UploadError::storage(path, e))?;
    writer.finish().map_err(|e| UploadError::storage(path, e))?;
    Ok(WriteOutcome::Written(written))
}
