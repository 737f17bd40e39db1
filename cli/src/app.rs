//! Application context: unified state passed to every command handler.

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::resolver::TokioHostResolver;
use crate::infra::settings::RuntimeSettings;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags passed from the top-level CLI.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
///
/// Constructed once in `main` and passed as `&AppContext` to all command
/// handlers.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Runs `mvn` with the configured deadline.
    pub runner: TokioCommandRunner,
    /// Resolves repository hosts for the private-network check.
    pub resolver: TokioHostResolver,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the `MAVEN_DEPLOY_*` runtime settings are invalid.
    pub fn new(flags: &OutputFlags, cancel: CancellationToken) -> Result<Self> {
        let settings = RuntimeSettings::from_env()?;
        Ok(Self::with_settings(flags, &settings, cancel))
    }

    /// Construct an `AppContext` with explicit runtime settings. `cancel`
    /// is shared by the runner and the resolver; cancelling it kills `mvn`
    /// and aborts in-flight lookups.
    #[must_use]
    pub fn with_settings(
        flags: &OutputFlags,
        settings: &RuntimeSettings,
        cancel: CancellationToken,
    ) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        tracing::debug!(?settings, "runtime settings loaded");

        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            runner: TokioCommandRunner::new(settings.command_timeout(), cancel.clone()),
            resolver: TokioHostResolver::new(settings.resolve_timeout(), cancel),
        }
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }
}
