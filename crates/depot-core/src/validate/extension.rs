//! Stem/extension split on the last dot.

/// Extension after the last `.`, as written (not lowercased).
///
/// Empty when there is no dot, when the name ends with `.`, or when the only
/// dot is the leading one (`.pdf` is a dotfile, not a PDF).
pub fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx < name.len() - 1 => &name[idx + 1..],
        _ => "",
    }
}

/// Name without its extension. A leading dot is part of the stem.
pub fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}
