//! Pure input validators. No I/O, no async.
//!
//! Every value that ends up on the Maven command line passes through one of
//! these functions first. Paths are checked lexically and never touch the
//! filesystem.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::{CoordinateError, PathError, ProfileError};

/// Maven coordinate grammar: alphanumerics, dots, dashes, underscores.
pub static COORDINATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Constant pattern; compilation cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9._-]*$").expect("valid regex")
});

/// Profile grammar: leading letter, then alphanumerics, dashes, underscores.
pub static PROFILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*$").expect("valid regex")
});

pub const MAX_COORDINATE_LEN: usize = 256;
pub const MAX_PROFILE_LEN: usize = 128;

/// Validate a Maven group ID or artifact ID.
///
/// Checks run in order: empty, length, grammar, then `..`. The grammar
/// already admits `a..b`, so the final check is what rejects it.
///
/// # Errors
///
/// Returns the first rule the value breaks.
pub fn validate_coordinate(value: &str, field: &'static str) -> Result<(), CoordinateError> {
    if value.is_empty() {
        return Err(CoordinateError::Empty { field });
    }
    if value.len() > MAX_COORDINATE_LEN {
        return Err(CoordinateError::TooLong {
            field,
            max: MAX_COORDINATE_LEN,
        });
    }
    if !COORDINATE_RE.is_match(value) {
        return Err(CoordinateError::DisallowedCharacters { field });
    }
    if value.contains("..") {
        return Err(CoordinateError::Traversal { field });
    }
    Ok(())
}

/// Validate a Maven profile name.
///
/// # Errors
///
/// Returns the first rule the name breaks.
pub fn validate_profile(name: &str) -> Result<(), ProfileError> {
    if name.is_empty() {
        return Err(ProfileError::Empty);
    }
    if name.len() > MAX_PROFILE_LEN {
        return Err(ProfileError::TooLong {
            max: MAX_PROFILE_LEN,
        });
    }
    if !PROFILE_RE.is_match(name) {
        return Err(ProfileError::InvalidName);
    }
    Ok(())
}

/// Lexically normalise `path`: drop `.` segments and fold `name/..` pairs.
///
/// Leading `..` segments that cannot be folded are kept, and `..` directly
/// under a root is dropped. An empty result becomes `.`. The function is
/// idempotent.
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Validate a relative file path so it cannot leave the working directory.
///
/// The empty string is accepted; callers substitute their own default.
///
/// # Errors
///
/// Returns [`PathError::Absolute`] if the cleaned path is absolute or rooted,
/// and [`PathError::Traversal`] if it still climbs out with `..`.
pub fn validate_path(path: &str) -> Result<(), PathError> {
    if path.is_empty() {
        return Ok(());
    }

    let cleaned = clean_path(Path::new(path));

    // A drive prefix without a root (`C:pom.xml`) is still anchored outside
    // the working directory.
    let anchored = cleaned
        .components()
        .any(|c| matches!(c, Component::Prefix(_)));
    if cleaned.is_absolute() || cleaned.has_root() || anchored {
        return Err(PathError::Absolute);
    }
    if cleaned.components().any(|c| c == Component::ParentDir) {
        return Err(PathError::Traversal);
    }
    Ok(())
}
