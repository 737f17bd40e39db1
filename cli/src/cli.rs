//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use maven_deploy::app::{AppContext, OutputFlags};
use maven_deploy::commands;

/// Deploy Maven artifacts as a release hook
#[derive(Parser)]
#[command(
    name = "maven-deploy",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also honoured via `NO_COLOR`)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a release hook (deploys on post-publish)
    Execute(commands::execute::ExecuteArgs),

    /// Check a configuration without deploying
    Validate(commands::validate::ValidateArgs),

    /// Show plugin metadata and configuration schema
    Info,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command. Returns `false` when the hook failed or the
    /// configuration is invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if runtime settings or the configuration file cannot
    /// be loaded, or output cannot be rendered.
    pub async fn run(self, cancel: CancellationToken) -> Result<bool> {
        let Cli {
            json,
            quiet,
            no_color,
            command,
            ..
        } = self;
        let app = AppContext::new(
            &OutputFlags {
                no_color,
                quiet,
                json,
            },
            cancel,
        )?;

        match command {
            Command::Execute(args) => commands::execute::run(&app, args).await,
            Command::Validate(args) => commands::validate::run(&app, &args).await,
            Command::Info => commands::info::run(&app).map(|()| true),
            Command::Version => commands::version::run(&app).map(|()| true),
        }
    }
}
