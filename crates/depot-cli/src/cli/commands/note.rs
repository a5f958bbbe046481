//! `depot note` – save a sender's message as a text note.

use anyhow::Result;
use depot_core::config::DepotConfig;
use depot_core::UploadService;

pub fn run_note(cfg: &DepotConfig, email: &str, subject: &str, message: &str) -> Result<()> {
    let path = UploadService::from_config(cfg).save_message(email, subject, message)?;
    println!("Saved note to {}", path.display());
    Ok(())
}
