//! CLI command handlers, one file per command.

mod completions;
mod note;
mod show_config;
mod upload;

pub use completions::run_completions;
pub use note::run_note;
pub use show_config::run_show_config;
pub use upload::run_upload;
