//! Maven deploy command construction.
//!
//! The argument list is handed to the process runner as discrete argv
//! entries; no shell ever sees it. Every token is either a literal or a value
//! that passed its validator.

use std::fmt;

use crate::domain::config::DeployConfig;
use crate::domain::error::BuildError;
use crate::domain::validate::{validate_path, validate_profile};

/// Program name of the deploy tool.
pub const MAVEN_PROGRAM: &str = "mvn";

/// Ordered, validated arguments for `mvn`. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenCommand {
    args: Vec<String>,
}

impl MavenCommand {
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Borrowed view for [`crate::application::ports::CommandRunner::run`].
    #[must_use]
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }

    /// Human-readable rendering, e.g. `mvn deploy -f pom.xml`. Display only;
    /// never fed back into a shell.
    #[must_use]
    pub fn preview(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MavenCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MAVEN_PROGRAM)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

impl From<MavenCommand> for Vec<String> {
    fn from(cmd: MavenCommand) -> Self {
        cmd.args
    }
}

/// Build the `mvn deploy` argument list.
///
/// Token order is fixed: `deploy`, `-f <pom>`, `-DskipTests`, `-s <settings>`,
/// `-P <profiles>`. Coordinates and the repository URL are validated by the
/// caller; this function validates the tokens it emits.
///
/// # Errors
///
/// Returns the first [`BuildError`] in token order. All profiles are checked
/// before any are joined.
pub fn build_command(cfg: &DeployConfig) -> Result<MavenCommand, BuildError> {
    let mut args = vec!["deploy".to_string()];

    let pom_path = cfg.effective_pom_path();
    validate_path(pom_path).map_err(BuildError::PomPath)?;
    args.extend(["-f".to_string(), pom_path.to_string()]);

    if cfg.skip_tests {
        args.push("-DskipTests".to_string());
    }

    if !cfg.settings.is_empty() {
        validate_path(&cfg.settings).map_err(BuildError::Settings)?;
        args.extend(["-s".to_string(), cfg.settings.clone()]);
    }

    if !cfg.profiles.is_empty() {
        for profile in &cfg.profiles {
            validate_profile(profile).map_err(|source| BuildError::Profile {
                name: profile.clone(),
                source,
            })?;
        }
        args.extend(["-P".to_string(), cfg.profiles.join(",")]);
    }

    Ok(MavenCommand { args })
}
