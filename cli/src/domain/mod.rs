//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod config;
pub mod error;
pub mod network;
pub mod repository;
pub mod validate;

pub use command::{MAVEN_PROGRAM, MavenCommand, build_command};
pub use config::{DEFAULT_POM_PATH, DeployConfig};
pub use error::{BuildError, CoordinateError, DeployError, PathError, ProfileError, RepositoryError};
pub use network::{ReservedRange, classify, is_private};
pub use repository::{RepositoryTarget, check_resolved, inspect_url};
pub use validate::{clean_path, validate_coordinate, validate_path, validate_profile};
