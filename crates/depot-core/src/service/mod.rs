//! Upload service: validates candidates, provisions the per-user directory,
//! resolves filename collisions and writes the bytes.
//!
//! Calls are synchronous and run on the caller's thread. Candidates are
//! handled strictly in input order. A batch is best-effort: one bad file does
//! not block the other, and nothing already written is rolled back.

mod outcome;

pub use outcome::{BatchReport, CandidateOutcome};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::candidate::UploadCandidate;
use crate::config::DepotConfig;
use crate::error::UploadError;
use crate::naming;
use crate::scope::{note_token, UserScope};
use crate::storage::{self, WriteOutcome};
use crate::validate::validate_candidate;

/// Hard cap on candidates per call.
pub const MAX_FILES_PER_REQUEST: usize = 2;

/// How many times a name is re-resolved when another writer takes it between
/// the existence check and the create-only open.
pub const MAX_NAME_RETRIES: usize = 5;

/// Stores uploaded files under `<upload_root>/<user scope>/<filename>`.
///
/// Root and size limit are fixed at construction.
#[derive(Debug, Clone)]
pub struct UploadService {
    upload_root: PathBuf,
    max_file_size_bytes: u64,
}

impl UploadService {
    pub fn new(upload_root: impl Into<PathBuf>, max_file_size_bytes: u64) -> Self {
        Self {
            upload_root: upload_root.into(),
            max_file_size_bytes,
        }
    }

    pub fn from_config(cfg: &DepotConfig) -> Self {
        Self::new(cfg.upload_root.clone(), cfg.max_file_size_bytes)
    }

    pub fn upload_root(&self) -> &Path {
        &self.upload_root
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }

    /// Directory that files for `identity` go to.
    pub fn user_dir(&self, identity: &str) -> PathBuf {
        UserScope::from_identity(identity).dir_in(&self.upload_root)
    }

    /// Uploads up to [`MAX_FILES_PER_REQUEST`] candidates and returns the
    /// stored filenames in input order.
    ///
    /// Zero-byte candidates are skipped, invalid ones are logged and left out.
    /// Fails with `NoFile`/`TooManyFiles` before touching the disk, with
    /// `Storage` on directory or write failure, and with `NoFilesStored` when
    /// nothing was written.
    pub fn upload_many(
        &self,
        candidates: Vec<UploadCandidate>,
        identity: &str,
    ) -> Result<Vec<String>, UploadError> {
        Ok(self.upload_batch(candidates, identity)?.stored_names())
    }

    /// Same as [`UploadService::upload_many`], reporting what happened to every candidate.
    pub fn upload_batch(
        &self,
        candidates: Vec<UploadCandidate>,
        identity: &str,
    ) -> Result<BatchReport, UploadError> {
        check_batch(&candidates)?;

        let scope = UserScope::from_identity(identity);
        let dir = scope.dir_in(&self.upload_root);
        storage::ensure_dir(&dir)?;

        let mut outcomes = Vec::with_capacity(candidates.len());
        for mut candidate in candidates {
            let original_name = candidate.original_name.clone();

            if candidate.is_empty() {
                tracing::debug!(file = %original_name, "skipping empty upload candidate");
                outcomes.push(CandidateOutcome::Skipped { original_name });
                continue;
            }

            if let Err(reason) = validate_candidate(
                &candidate.original_name,
                candidate.size_bytes,
                self.max_file_size_bytes,
            ) {
                tracing::warn!(file = %original_name, scope = %scope, "upload rejected: {}", reason);
                outcomes.push(CandidateOutcome::Rejected {
                    original_name,
                    reason,
                });
                continue;
            }

            let filename = self.store(&dir, &mut candidate)?;
            outcomes.push(CandidateOutcome::Stored {
                original_name,
                filename,
            });
        }

        let report = BatchReport {
            scope: scope.to_string(),
            outcomes,
        };
        if report.stored_count() == 0 {
            return Err(UploadError::NoFilesStored {
                outcomes: report.outcomes,
            });
        }
        Ok(report)
    }

    /// Uploads a single candidate. Unlike a batch, a validation failure is
    /// returned as the error instead of being recorded.
    pub fn upload_one(
        &self,
        mut candidate: UploadCandidate,
        identity: &str,
    ) -> Result<String, UploadError> {
        if candidate.is_empty() {
            return Err(UploadError::NoFile);
        }
        validate_candidate(
            &candidate.original_name,
            candidate.size_bytes,
            self.max_file_size_bytes,
        )?;

        let dir = self.user_dir(identity);
        storage::ensure_dir(&dir)?;
        self.store(&dir, &mut candidate)
    }

    /// Writes a sender's message note to `<upload_root>/<token>.txt`, replacing
    /// any earlier note from the same sender. Returns the note's path.
    pub fn save_message(
        &self,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<PathBuf, UploadError> {
        if email.is_empty() {
            return Err(UploadError::EmptySender);
        }
        storage::ensure_dir(&self.upload_root)?;

        let path = self.upload_root.join(format!("{}.txt", note_token(email)));
        let body = format!("Subject: {subject}\nMessage:\n{message}");
        fs::write(&path, body).map_err(|e| UploadError::storage(&path, e))?;
        tracing::info!(path = %path.display(), "saved message note");
        Ok(path)
    }

    /// Resolves a free name and writes the candidate there without ever
    /// replacing an existing file.
    fn store(&self, dir: &Path, candidate: &mut UploadCandidate) -> Result<String, UploadError> {
        store_with(dir, candidate, naming::resolve_filename)
    }
}

/// [`UploadService::store`] with an explicit name resolver.
fn store_with<F>(
    dir: &Path,
    candidate: &mut UploadCandidate,
    mut resolve: F,
) -> Result<String, UploadError>
where
    F: FnMut(&str, &Path) -> String,
{
    for _ in 0..MAX_NAME_RETRIES {
        let filename = resolve(&candidate.original_name, dir);
        let path = dir.join(&filename);
        match storage::write_new(&path, &mut *candidate.content)? {
            WriteOutcome::Written(bytes) => {
                if bytes != candidate.size_bytes {
                    tracing::warn!(
                        file = %filename,
                        declared = candidate.size_bytes,
                        written = bytes,
                        "upload size differs from declared size"
                    );
                }
                tracing::info!(path = %path.display(), bytes, "stored upload");
                return Ok(filename);
            }
            WriteOutcome::Exists => {
                tracing::debug!(file = %filename, "name taken before write, resolving again");
            }
        }
    }

    Err(UploadError::storage(
        dir.join(&candidate.original_name),
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "no free filename after repeated collisions",
        ),
    ))
}

/// Whole-call checks that run before any I/O.
fn check_batch(candidates: &[UploadCandidate]) -> Result<(), UploadError> {
    if candidates.is_empty() {
        return Err(UploadError::NoFile);
    }
    if candidates.len() > MAX_FILES_PER_REQUEST {
        return Err(UploadError::TooManyFiles {
            max: MAX_FILES_PER_REQUEST,
            got: candidates.len(),
        });
    }
    if candidates.iter().all(UploadCandidate::is_empty) {
        return Err(UploadError::NoFile);
    }
    Ok(())
}
