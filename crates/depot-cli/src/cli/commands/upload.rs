//! `depot upload --user <IDENTITY> <FILE>...` – store files in the user's directory.

use anyhow::Result;
use depot_core::config::DepotConfig;
use depot_core::{UploadCandidate, UploadService};
use std::path::PathBuf;

use crate::cli::report::outcome_line;

/// Opens each file as a candidate and uploads them as one batch.
///
/// Prints one line per file (or the whole report as JSON) on success. When
/// nothing could be stored the per-file reasons travel with the error.
pub fn run_upload(cfg: &DepotConfig, user: &str, files: &[PathBuf], json: bool) -> Result<()> {
    let candidates = files
        .iter()
        .map(|path| UploadCandidate::from_path(path))
        .collect::<Result<Vec<_>>>()?;

    let service = UploadService::from_config(cfg);
    let report = service.upload_batch(candidates, user)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for outcome in &report.outcomes {
        println!("{}", outcome_line(outcome));
    }
    println!(
        "{} file(s) uploaded to {}",
        report.stored_count(),
        service.user_dir(user).display()
    );
    Ok(())
}
