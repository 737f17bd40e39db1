//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::net::IpAddr;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;
use thiserror::Error;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` with `args` as discrete argv entries (no shell) and
    /// capture its output. `env` is added to the inherited environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned, exceeds its
    /// deadline, or is cancelled. On timeout or cancellation the child
    /// process must be killed, and the error must downcast to [`Interrupted`].
    /// A non-zero exit is NOT an error at this level.
    async fn run(&self, program: &str, args: &[&str], env: &[(&str, &str)]) -> Result<Output>;
}

// ── Host Resolver Port ────────────────────────────────────────────────────────

/// Abstracts DNS resolution so the repository guard can be tested without
/// network access.
#[allow(async_fn_in_trait)]
pub trait HostResolver {
    /// Resolve `host` to every address it maps to.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails, times out, or is cancelled.
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>>;
}

// ── Shared error kinds ────────────────────────────────────────────────────────

/// Why a deadline-bound operation stopped early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("{operation} was cancelled")]
    Cancelled { operation: String },

    #[error("{operation} timed out after {after:?}")]
    TimedOut { operation: String, after: Duration },
}

/// A process run that was stopped early, with whatever the child printed
/// before it was killed.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct Interrupted {
    pub reason: RunError,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl Interrupted {
    /// Stdout followed by stderr, lossily decoded.
    #[must_use]
    pub fn partial_output(&self) -> String {
        let mut text = String::from_utf8_lossy(&self.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&self.stderr));
        text
    }
}
