//! Runtime tunables loaded from `MAVEN_DEPLOY_*` environment variables.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::infra::command_runner::DEFAULT_CMD_TIMEOUT;
use crate::infra::resolver::DEFAULT_RESOLVE_TIMEOUT;

pub const ENV_PREFIX: &str = "MAVEN_DEPLOY_";

/// Process-level settings, separate from the per-request plugin config.
///
/// Each field maps to `MAVEN_DEPLOY_<FIELD>`:
///   - `MAVEN_DEPLOY_COMMAND_TIMEOUT_SECS` (default `1800`)
///   - `MAVEN_DEPLOY_RESOLVE_TIMEOUT_SECS` (default `10`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuntimeSettings {
    /// Deadline for the `mvn deploy` child process.
    #[serde(default = "default_command_timeout_secs")]
    pub command_timeout_secs: u64,

    /// Deadline for resolving the repository host.
    #[serde(default = "default_resolve_timeout_secs")]
    pub resolve_timeout_secs: u64,
}

fn default_command_timeout_secs() -> u64 {
    DEFAULT_CMD_TIMEOUT.as_secs()
}

fn default_resolve_timeout_secs() -> u64 {
    DEFAULT_RESOLVE_TIMEOUT.as_secs()
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            command_timeout_secs: default_command_timeout_secs(),
            resolve_timeout_secs: default_resolve_timeout_secs(),
        }
    }
}

impl RuntimeSettings {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a `MAVEN_DEPLOY_*` variable is present but not a
    /// valid non-negative integer.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Load from an explicit set of variables.
    ///
    /// # Errors
    ///
    /// See [`RuntimeSettings::from_env`].
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .with_context(|| format!("failed to load settings from {ENV_PREFIX}* env vars"))
    }

    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    #[must_use]
    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_secs(self.resolve_timeout_secs)
    }
}
