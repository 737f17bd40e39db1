//! Application service: the deploy use-case.
//!
//! Validate → Build → {Preview | Execute}. Each stage short-circuits on its
//! first failure and the final state is returned as a [`DeployOutcome`],
//! which converts into the host-facing [`ExecuteResponse`].

use std::process::Output;

use release_plugin_common::{ExecuteRequest, ExecuteResponse, Hook, ReleaseContext};
use serde_json::{Map, Value};

use crate::application::ports::{CommandRunner, HostResolver, Interrupted};
use crate::application::services::repository_guard::validate_repository_url;
use crate::domain::command::{MAVEN_PROGRAM, MavenCommand, build_command};
use crate::domain::config::{DeployConfig, keys};
use crate::domain::error::{BuildError, DeployError};
use crate::domain::validate::validate_coordinate;

/// Terminal state of one deploy attempt.
#[derive(Debug)]
pub enum DeployOutcome {
    /// A coordinate or the repository URL failed validation.
    Rejected(DeployError),
    /// The argument list could not be built.
    BuildFailed(BuildError),
    /// Dry run: the command that would have run.
    Previewed {
        config: DeployConfig,
        version: String,
        command: MavenCommand,
    },
    /// Maven ran and exited successfully.
    Executed { config: DeployConfig, version: String },
    /// Maven could not be run or exited unsuccessfully.
    ExecutionFailed(DeployError),
}

impl DeployOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Previewed { .. } | Self::Executed { .. })
    }
}

impl From<DeployOutcome> for ExecuteResponse {
    fn from(outcome: DeployOutcome) -> Self {
        match outcome {
            DeployOutcome::Rejected(err) | DeployOutcome::ExecutionFailed(err) => {
                ExecuteResponse::failure(err.to_string())
            }
            DeployOutcome::BuildFailed(err) => ExecuteResponse::failure(err.to_string()),
            DeployOutcome::Previewed {
                config,
                version,
                command,
            } => {
                let mut outputs = coordinate_outputs(&config, version);
                outputs.insert("pom_path".into(), Value::from(config.effective_pom_path()));
                outputs.insert("command".into(), Value::from(command.preview()));
                outputs.insert("skip_tests".into(), Value::from(config.skip_tests));
                outputs.insert("profiles".into(), Value::from(config.profiles));
                ExecuteResponse::success("Would deploy Maven artifact").with_outputs(outputs)
            }
            DeployOutcome::Executed { config, version } => {
                let message = format!(
                    "Deployed Maven artifact {}:{}:{version}",
                    config.group_id, config.artifact_id
                );
                ExecuteResponse::success(message)
                    .with_outputs(coordinate_outputs(&config, version))
            }
        }
    }
}

fn coordinate_outputs(config: &DeployConfig, version: String) -> Map<String, Value> {
    let mut outputs = Map::new();
    outputs.insert("group_id".into(), Value::from(config.group_id.clone()));
    outputs.insert("artifact_id".into(), Value::from(config.artifact_id.clone()));
    outputs.insert("version".into(), Value::from(version));
    outputs
}

/// Handle one hook invocation from the host.
///
/// Only [`Hook::PostPublish`] deploys; every other hook is acknowledged
/// without touching the configuration.
pub async fn execute(
    runner: &impl CommandRunner,
    resolver: &impl HostResolver,
    request: &ExecuteRequest,
) -> ExecuteResponse {
    match request.hook {
        Hook::PostPublish => {
            let config = DeployConfig::from_map(&request.config);
            deploy(runner, resolver, config, &request.context, request.dry_run)
                .await
                .into()
        }
        other => ExecuteResponse::success(format!("Hook {other} not handled")),
    }
}

/// Run the deploy state machine for one configuration.
pub async fn deploy(
    runner: &impl CommandRunner,
    resolver: &impl HostResolver,
    config: DeployConfig,
    release: &ReleaseContext,
    dry_run: bool,
) -> DeployOutcome {
    if let Err(err) = validate_inputs(resolver, &config).await {
        tracing::warn!(error = %err, "deploy rejected");
        return DeployOutcome::Rejected(err);
    }

    let command = match build_command(&config) {
        Ok(command) => command,
        Err(err) => {
            tracing::warn!(field = err.field(), error = %err, "deploy command rejected");
            return DeployOutcome::BuildFailed(err);
        }
    };
    tracing::debug!(args = ?command.args(), "built maven command");

    let version = release.version.clone();
    if dry_run {
        return DeployOutcome::Previewed {
            config,
            version,
            command,
        };
    }

    tracing::info!(
        group_id = %config.group_id,
        artifact_id = %config.artifact_id,
        %version,
        "running maven deploy",
    );
    let args = command.arg_refs();
    let env = config.credential_env();
    match runner.run(MAVEN_PROGRAM, &args, &env).await {
        Ok(output) if output.status.success() => {
            tracing::info!("maven deploy succeeded");
            DeployOutcome::Executed { config, version }
        }
        Ok(output) => {
            tracing::warn!(status = %output.status, "maven deploy failed");
            DeployOutcome::ExecutionFailed(DeployError::Execution {
                reason: output.status.to_string(),
                output: captured_output(&output),
            })
        }
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "maven could not be run");
            let output = err
                .downcast_ref::<Interrupted>()
                .map(Interrupted::partial_output)
                .unwrap_or_default();
            DeployOutcome::ExecutionFailed(DeployError::Execution {
                reason: format!("{err:#}"),
                output,
            })
        }
    }
}

/// Fail-fast checks that run before the builder: coordinates, then the
/// repository URL.
async fn validate_inputs(
    resolver: &impl HostResolver,
    config: &DeployConfig,
) -> Result<(), DeployError> {
    validate_coordinate(&config.group_id, keys::GROUP_ID)?;
    validate_coordinate(&config.artifact_id, keys::ARTIFACT_ID)?;
    validate_repository_url(resolver, &config.repository).await?;
    Ok(())
}

/// Stdout followed by stderr, lossily decoded.
fn captured_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}
