//! Validate command: check a configuration file without deploying.

use anyhow::Result;
use clap::Args;
use release_plugin_common::ConfigParser;

use crate::app::AppContext;
use crate::application::services::config_validation;
use crate::infra::config::load_config_map;

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Plugin configuration file (YAML or JSON), or `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub config: String,
}

/// Run the validate command. Returns whether the configuration is valid.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the response
/// cannot be rendered.
pub async fn run(app: &AppContext, args: &ValidateArgs) -> Result<bool> {
    let config = load_config_map(&args.config)?;
    let parser = ConfigParser::new(&config);
    let response = config_validation::validate(&app.resolver, &parser).await;
    app.renderer().render_validate(&response)?;
    Ok(response.valid)
}
