//! Execute command: run one hook against a configuration file.

use anyhow::Result;
use clap::Args;
use release_plugin_common::{ExecuteRequest, Hook, ReleaseContext};

use crate::app::AppContext;
use crate::application::services::deploy;
use crate::infra::config::load_config_map;

/// Arguments for the execute command.
#[derive(Args, Debug)]
pub struct ExecuteArgs {
    /// Plugin configuration file (YAML or JSON), or `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub config: String,

    /// Release hook being invoked
    #[arg(long, value_enum, default_value_t = Hook::PostPublish)]
    pub hook: Hook,

    /// Version being released
    #[arg(long = "release-version", default_value = "")]
    pub release_version: String,

    /// Previously released version
    #[arg(long)]
    pub previous_version: Option<String>,

    /// Tag created for the release
    #[arg(long)]
    pub tag_name: Option<String>,

    /// Branch the release is cut from
    #[arg(long)]
    pub branch: Option<String>,

    /// Show the Maven command without running it
    #[arg(long)]
    pub dry_run: bool,
}

impl ExecuteArgs {
    /// Build the host request from the arguments and a loaded config map.
    #[must_use]
    pub fn into_request(self, config: serde_json::Map<String, serde_json::Value>) -> ExecuteRequest {
        ExecuteRequest {
            hook: self.hook,
            config,
            context: ReleaseContext {
                version: self.release_version,
                previous_version: self.previous_version,
                tag_name: self.tag_name,
                branch: self.branch,
            },
            dry_run: self.dry_run,
        }
    }
}

/// Run the execute command. Returns whether the hook succeeded.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the response
/// cannot be rendered. Deploy failures are reported in the response.
pub async fn run(app: &AppContext, args: ExecuteArgs) -> Result<bool> {
    let config = load_config_map(&args.config)?;
    let request = args.into_request(config);
    tracing::debug!(hook = %request.hook, dry_run = request.dry_run, "executing hook");

    let response = deploy::execute(&app.runner, &app.resolver, &request).await;
    app.renderer().render_execute(&response)?;
    Ok(response.success)
}
