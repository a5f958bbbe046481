//! On-disk source files for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use depot_core::UploadCandidate;

pub const MB: usize = 1024 * 1024;

/// Writes `len` bytes of a repeating pattern to `dir/name` and returns the path.
pub fn source_file(dir: &Path, name: &str, len: usize) -> PathBuf {
    let path = dir.join(name);
    let body: Vec<u8> = (0u8..=250).cycle().take(len).collect();
    fs::write(&path, body).unwrap();
    path
}

pub fn candidate(dir: &Path, name: &str, len: usize) -> UploadCandidate {
    UploadCandidate::from_path(&source_file(dir, name, len)).unwrap()
}

pub fn list(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
