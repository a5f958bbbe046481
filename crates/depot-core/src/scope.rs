//! Per-user destination directories.
//!
//! A caller-supplied identity (usually an email address) is reduced to a
//! filesystem-safe token that names one flat directory under the upload root.

use std::fmt;
use std::path::{Path, PathBuf};

/// Filesystem-safe directory token derived from a caller identity.
///
/// Only `[A-Za-z0-9._-]` survive; every other character becomes `_`, one
/// underscore per character. The reserved names `.` and `..` are turned into
/// underscores too so a scope always stays below the upload root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserScope(String);

impl UserScope {
    pub fn from_identity(identity: &str) -> Self {
        let token = identity
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect::<String>();
        if token == "." || token == ".." {
            return UserScope("_".repeat(token.len()));
        }
        UserScope(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory for this scope under `root`.
    pub fn dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl fmt::Display for UserScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Token used to name a sender's message note: ASCII alphanumerics only.
pub fn note_token(identity: &str) -> String {
    identity
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_becomes_token() {
        assert_eq!(UserScope::from_identity("a@b.com").as_str(), "a_b.com");
        assert_eq!(
            UserScope::from_identity("user@test.com").as_str(),
            "user_test.com"
        );
    }

    #[test]
    fn keeps_dots_dashes_underscores() {
        assert_eq!(
            UserScope::from_identity("first.last-1_x").as_str(),
            "first.last-1_x"
        );
    }

    #[test]
    fn no_collapsing_and_unicode_replaced() {
        assert_eq!(UserScope::from_identity("a  b").as_str(), "a__b");
        assert_eq!(UserScope::from_identity("jos\u{e9}/x").as_str(), "jos__x");
    }

    #[test]
    fn path_separators_cannot_escape_root() {
        let scope = UserScope::from_identity("../../etc");
        assert_eq!(scope.as_str(), ".._.._etc");
        assert_eq!(
            scope.dir_in(Path::new("/srv/up")),
            PathBuf::from("/srv/up/.._.._etc")
        );
    }

    #[test]
    fn reserved_names_replaced() {
        assert_eq!(UserScope::from_identity(".").as_str(), "_");
        assert_eq!(UserScope::from_identity("..").as_str(), "__");
        assert_eq!(UserScope::from_identity("...").as_str(), "...");
    }

    #[test]
    fn note_token_is_stricter() {
        assert_eq!(note_token("a.b@c.com"), "a_b_c_com");
    }
}
