//! Per-candidate results of a batch upload.

use serde::{Serialize, Serializer};

use crate::error::UploadError;

/// What happened to one candidate, in input order.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CandidateOutcome {
    /// Written under `filename`, which differs from `original_name` after a collision.
    Stored {
        original_name: String,
        filename: String,
    },
    /// Zero bytes; left out without counting as an error.
    Skipped { original_name: String },
    /// Failed validation; the rest of the batch went ahead.
    Rejected {
        original_name: String,
        #[serde(serialize_with = "as_display")]
        reason: UploadError,
    },
}

fn as_display<S: Serializer>(reason: &UploadError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(reason)
}

impl CandidateOutcome {
    pub fn original_name(&self) -> &str {
        match self {
            CandidateOutcome::Stored { original_name, .. }
            | CandidateOutcome::Skipped { original_name }
            | CandidateOutcome::Rejected { original_name, .. } => original_name,
        }
    }

    /// Stored filename, if this candidate was written.
    pub fn filename(&self) -> Option<&str> {
        match self {
            CandidateOutcome::Stored { filename, .. } => Some(filename),
            _ => None,
        }
    }
}

/// Outcome of a best-effort batch upload.
///
/// Not a transaction: files stored earlier in the batch stay on disk whatever
/// happens to later candidates.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    /// Directory token the files went to.
    pub scope: String,
    pub outcomes: Vec<CandidateOutcome>,
}

impl BatchReport {
    /// Stored filenames in input order, skipped and rejected candidates omitted.
    pub fn stored_names(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|o| o.filename().map(str::to_string))
            .collect()
    }

    pub fn stored_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.filename().is_some()).count()
    }

    pub fn rejected(&self) -> impl Iterator<Item = (&str, &UploadError)> {
        self.outcomes.iter().filter_map(|o| match o {
            CandidateOutcome::Rejected {
                original_name,
                reason,
            } => Some((original_name.as_str(), reason)),
            _ => None,
        })
    }
}
