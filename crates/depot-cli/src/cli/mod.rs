//! CLI for the depot upload store.

mod commands;
pub mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use depot_core::config::{self, DepotConfig};
use std::path::PathBuf;

use commands::{run_completions, run_note, run_show_config, run_upload};

/// Top-level CLI for the depot upload store.
#[derive(Debug, Parser)]
#[command(name = "depot")]
#[command(about = "depot: per-user file upload store", long_about = None)]
pub struct Cli {
    /// Read configuration from FILE instead of ~/.config/depot/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Store uploads under DIR instead of the configured upload root.
    #[arg(long, global = true, value_name = "DIR")]
    pub upload_root: Option<PathBuf>,

    /// Per-file size limit in bytes, overriding the configured value.
    #[arg(long, global = true, value_name = "BYTES")]
    pub max_size: Option<u64>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Upload one or two files into the user's directory.
    Upload {
        /// Identity the files belong to (e.g. an email address).
        #[arg(long, value_name = "IDENTITY", value_parser = clap::builder::NonEmptyStringValueParser::new())]
        user: String,

        /// Files to upload.
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Print the per-file report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Save a message note from a sender under the upload root.
    Note {
        /// Sender email; names the note file.
        #[arg(long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },

    /// Print the effective configuration.
    ShowConfig,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn effective_config(&self) -> Result<DepotConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        if let Some(root) = &self.upload_root {
            cfg.upload_root = root.clone();
        }
        if let Some(max) = self.max_size {
            cfg.max_file_size_bytes = max;
        }
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg)
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Upload { user, files, json } => {
                run_upload(&cli.effective_config()?, user, files, *json)?
            }
            CliCommand::Note {
                email,
                subject,
                message,
            } => run_note(&cli.effective_config()?, email, subject, message)?,
            CliCommand::ShowConfig => {
                run_show_config(&cli.effective_config()?, cli.config.as_deref())?
            }
            CliCommand::Completions { shell } => run_completions(*shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
