//! Human-readable rendering of upload outcomes and errors.

use depot_core::{CandidateOutcome, UploadError};

/// One line describing what happened to a file.
pub fn outcome_line(outcome: &CandidateOutcome) -> String {
    match outcome {
        CandidateOutcome::Stored {
            original_name,
            filename,
        } if original_name == filename => format!("stored    {filename}"),
        CandidateOutcome::Stored {
            original_name,
            filename,
        } => format!("stored    {original_name} -> {filename}"),
        CandidateOutcome::Skipped { original_name } => {
            format!("skipped   {original_name} (empty file)")
        }
        CandidateOutcome::Rejected {
            original_name,
            reason,
        } => format!("rejected  {original_name}: {reason}"),
    }
}

/// Lines printed to stderr for a failed command. Upload errors carry their
/// category code; a batch with nothing stored lists every file's outcome.
pub fn error_lines(err: &anyhow::Error) -> Vec<String> {
    let Some(upload) = err.downcast_ref::<UploadError>() else {
        return vec![format!("depot error: {:#}", err)];
    };

    let mut lines = vec![format!(
        "depot error [{}]: {}",
        upload.category().as_str(),
        upload
    )];
    if let UploadError::NoFilesStored { outcomes } = upload {
        lines.extend(outcomes.iter().map(|o| format!("  {}", outcome_line(o))));
    }
    lines
}
