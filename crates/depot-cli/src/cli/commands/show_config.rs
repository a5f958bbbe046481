//! `depot show-config` – print the effective configuration as TOML.

use anyhow::Result;
use depot_core::config::{self, DepotConfig};
use std::path::Path;

pub fn run_show_config(cfg: &DepotConfig, explicit: Option<&Path>) -> Result<()> {
    let source = match explicit {
        Some(path) => path.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", source.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
