//! Collision-safe filename resolution.
//!
//! An incoming name is kept as-is when free. Otherwise a local timestamp with
//! millisecond precision is appended to the stem; if even that is taken, an
//! 8-hex random token follows the timestamp. Names stay human-traceable in the
//! common case and the random token only shows up under heavy contention.

use std::path::Path;

use rand::RngCore;

use crate::validate::{file_extension, file_stem};

/// Random-suffix attempts after the timestamped name collides.
pub const MAX_RANDOM_ATTEMPTS: usize = 10;

/// `YYYYMMDD_HHMMSS_mmm`.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S_%3f";

/// Returns a name for `original` that does not exist in `dir` at the time of
/// the check.
///
/// After [`MAX_RANDOM_ATTEMPTS`] collisions the last candidate is returned
/// anyway; pair this with a create-only write to avoid overwriting.
pub fn resolve_filename(original: &str, dir: &Path) -> String {
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    resolve_with(original, dir, &timestamp, random_token)
}

/// Resolution with an explicit timestamp and token source.
pub fn resolve_with<F>(original: &str, dir: &Path, timestamp: &str, mut token: F) -> String
where
    F: FnMut() -> String,
{
    let taken = |name: &str| dir.join(name).exists();

    if !taken(original) {
        return original.to_string();
    }

    let stem = file_stem(original);
    let ext = file_extension(original);

    let mut name = format!("{stem}_{timestamp}.{ext}");
    let mut attempts = 0;
    while taken(&name) && attempts < MAX_RANDOM_ATTEMPTS {
        name = format!("{stem}_{timestamp}_{}.{ext}", token());
        attempts += 1;
    }

    if attempts > 0 {
        tracing::debug!(original, resolved = %name, attempts, "timestamped name collided");
    }
    name
}

/// 8 lowercase hex characters.
pub fn random_token() -> String {
    let mut bytes = [0u8; 4];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
