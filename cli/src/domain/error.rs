//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! Every message is user-facing and suitable for direct display.

use std::net::IpAddr;

use thiserror::Error;

// ── Coordinate errors ─────────────────────────────────────────────────────────

/// Errors for Maven coordinates (`group_id`, `artifact_id`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },

    #[error("invalid {field}: contains disallowed characters")]
    DisallowedCharacters { field: &'static str },

    #[error("{field} cannot contain '..'")]
    Traversal { field: &'static str },
}

impl CoordinateError {
    /// Name of the configuration field that failed.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::DisallowedCharacters { field }
            | Self::Traversal { field } => field,
        }
    }
}

// ── Path errors ───────────────────────────────────────────────────────────────

/// Errors for file paths handed to Maven (`pom_path`, `settings`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("absolute paths are not allowed")]
    Absolute,

    #[error("path traversal detected: cannot use '..' to escape working directory")]
    Traversal,
}

// ── Profile errors ────────────────────────────────────────────────────────────

/// Errors for Maven profile names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("profile name cannot be empty")]
    Empty,

    #[error("profile name too long (max {max} characters)")]
    TooLong { max: usize },

    #[error("invalid profile name: must be alphanumeric with dashes or underscores")]
    InvalidName,
}

// ── Repository errors ─────────────────────────────────────────────────────────

/// Errors raised by the repository URL guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("only HTTPS URLs are allowed (got {scheme})")]
    InsecureScheme { scheme: String },

    #[error("failed to resolve hostname: {reason}")]
    Resolution { host: String, reason: String },

    #[error("URLs pointing to private networks are not allowed")]
    PrivateNetwork {
        host: String,
        addr: IpAddr,
        range: &'static str,
    },
}

// ── Build errors ──────────────────────────────────────────────────────────────

/// Errors raised while assembling the Maven argument list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("invalid pom_path: {0}")]
    PomPath(#[source] PathError),

    #[error("invalid settings path: {0}")]
    Settings(#[source] PathError),

    #[error("invalid profile '{name}': {source}")]
    Profile { name: String, source: ProfileError },
}

impl BuildError {
    /// Name of the configuration field the failing token came from.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::PomPath(_) => "pom_path",
            Self::Settings(_) => "settings",
            Self::Profile { .. } => "profiles",
        }
    }
}

// ── Deploy errors ─────────────────────────────────────────────────────────────

/// Failure of a deploy invocation outside the command builder.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    #[error("invalid repository URL: {0}")]
    Repository(#[from] RepositoryError),

    /// Maven could not be run or exited unsuccessfully. `output` holds the
    /// captured stdout followed by stderr, verbatim.
    #[error("Maven deploy failed: {reason}\nOutput: {output}")]
    Execution { reason: String, output: String },
}
