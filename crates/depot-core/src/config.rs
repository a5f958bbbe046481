use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default per-file size limit: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Global configuration loaded from `~/.config/depot/config.toml`.
///
/// Read once at startup and handed to the upload service; never re-read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepotConfig {
    /// Root under which one directory per user scope is created.
    pub upload_root: PathBuf,
    /// Largest accepted file, in bytes (inclusive).
    pub max_file_size_bytes: u64,
}

impl Default for DepotConfig {
    fn default() -> Self {
        Self {
            upload_root: default_upload_root(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

/// `~/.local/share/depot/uploads`, or `./uploads` when XDG dirs are unavailable.
pub fn default_upload_root() -> PathBuf {
    xdg::BaseDirectories::with_prefix("depot")
        .map(|dirs| dirs.get_data_home().join("depot").join("uploads"))
        .unwrap_or_else(|_| PathBuf::from("uploads"))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("depot")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DepotConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DepotConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<DepotConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: DepotConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
