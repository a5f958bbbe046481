pub mod config;
pub mod logging;

pub mod candidate;
pub mod error;
pub mod naming;
pub mod scope;
pub mod service;
pub mod storage;
pub mod validate;

pub use candidate::UploadCandidate;
pub use error::{ErrorCategory, UploadError};
pub use scope::UserScope;
pub use service::{BatchReport, CandidateOutcome, UploadService};
