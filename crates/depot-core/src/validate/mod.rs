//! Per-candidate validation: size, then name, then extension allow-list.

mod extension;

pub use extension::{file_extension, file_stem};

use crate::error::UploadError;

/// Extensions accepted for upload (compared case-insensitively).
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "txt", "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "jpg", "jpeg", "png", "gif",
    "zip", "rar",
];

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Returns true if `extension` is in [`ALLOWED_EXTENSIONS`], ignoring case.
pub fn is_allowed_extension(extension: &str) -> bool {
    ALLOWED_EXTENSIONS
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(extension))
}

/// True if `name` is a single path component: no separators, no NUL, not `.`/`..`.
fn is_flat_name(name: &str) -> bool {
    name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}

/// Checks one candidate against the size limit and the naming rules.
///
/// The size check runs first, so an oversized `.exe` reports `FileTooLarge`.
pub fn validate_candidate(name: &str, size_bytes: u64, max_bytes: u64) -> Result<(), UploadError> {
    if size_bytes > max_bytes {
        return Err(UploadError::FileTooLarge {
            limit_mb: max_bytes / BYTES_PER_MB,
        });
    }

    if name.is_empty() || !is_flat_name(name) {
        return Err(UploadError::InvalidFilename);
    }

    let extension = file_extension(name).to_ascii_lowercase();
    if !is_allowed_extension(&extension) {
        return Err(UploadError::DisallowedFileType { extension });
    }

    Ok(())
}
