//! Error taxonomy for upload calls.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::service::CandidateOutcome;

/// Failure of an upload call, or the reason a single candidate was rejected.
///
/// `FileTooLarge`, `InvalidFilename` and `DisallowedFileType` describe one
/// candidate; inside a batch they are recorded and the batch continues. The
/// remaining kinds fail the whole call.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Nothing to upload: no candidates, or every candidate is zero bytes.
    #[error("no file selected for upload")]
    NoFile,

    /// More candidates than a single request may carry. Raised before any I/O.
    #[error("at most {max} files can be uploaded at once (got {got})")]
    TooManyFiles { max: usize, got: usize },

    /// Candidate exceeds the configured size limit (whole MB, for display).
    #[error("file exceeds the {limit_mb}MB size limit")]
    FileTooLarge { limit_mb: u64 },

    /// Candidate name is empty or is not a single path component.
    #[error("file name is empty")]
    InvalidFilename,

    /// Message note requested without a sender email.
    #[error("sender email is empty")]
    EmptySender,

    /// Candidate extension is not in the allow-list. `extension` may be empty.
    #[error("file type not allowed ({extension})")]
    DisallowedFileType { extension: String },

    /// Every candidate was skipped or rejected; `outcomes` says why, in input order.
    #[error("no files were stored")]
    NoFilesStored { outcomes: Vec<CandidateOutcome> },

    /// Directory creation or file write failed.
    #[error("storage error at {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse grouping used by callers to pick a message or error page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NoFile,
    Validation,
    Upload,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NoFile => "NO_FILE",
            ErrorCategory::Validation => "VALIDATION_ERROR",
            ErrorCategory::Upload => "UPLOAD_ERROR",
        }
    }
}

impl UploadError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        UploadError::Storage {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            UploadError::NoFile => ErrorCategory::NoFile,
            UploadError::TooManyFiles { .. }
            | UploadError::FileTooLarge { .. }
            | UploadError::InvalidFilename
            | UploadError::EmptySender
            | UploadError::DisallowedFileType { .. } => ErrorCategory::Validation,
            UploadError::NoFilesStored { .. } | UploadError::Storage { .. } => {
                ErrorCategory::Upload
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_large_message_carries_limit() {
        let e = UploadError::FileTooLarge { limit_mb: 10 };
        assert_eq!(e.to_string(), "file exceeds the 10MB size limit");
        assert_eq!(e.category(), ErrorCategory::Validation);
    }

    #[test]
    fn categories() {
        assert_eq!(UploadError::NoFile.category().as_str(), "NO_FILE");
        assert_eq!(
            UploadError::TooManyFiles { max: 2, got: 3 }.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            UploadError::DisallowedFileType {
                extension: "exe".into()
            }
            .category(),
            ErrorCategory::Validation
        );
        let storage = UploadError::storage(
            "/nope",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(storage.category().as_str(), "UPLOAD_ERROR");
    }

    #[test]
    fn storage_source_is_exposed() {
        use std::error::Error as _;
        let e = UploadError::storage("/x", io::Error::new(io::ErrorKind::Other, "disk full"));
        assert!(e.source().is_some());
        assert!(e.to_string().contains("/x"));
    }
}
