//! Unit tests for the deploy use-case.
//!
//! The runner and resolver are mocked; no process is spawned and no DNS
//! lookup is made.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;

use maven_deploy::application::ports::{Interrupted, RunError};
use maven_deploy::application::services::deploy::{DeployOutcome, deploy, execute};
use maven_deploy::domain::config::DeployConfig;
use release_plugin_common::{ExecuteRequest, Hook, ReleaseContext};
use serde_json::{Map, Value, json};

use crate::mocks::{RecordingRunner, StaticResolver, err_output};

fn config_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

fn request(hook: Hook, config: Value, dry_run: bool) -> ExecuteRequest {
    ExecuteRequest {
        hook,
        config: config_map(config),
        context: ReleaseContext {
            version: "1.2.3".to_string(),
            ..ReleaseContext::default()
        },
        dry_run,
    }
}

fn base_config() -> DeployConfig {
    DeployConfig {
        group_id: "com.example".to_string(),
        artifact_id: "my-lib".to_string(),
        pom_path: "pom.xml".to_string(),
        ..DeployConfig::default()
    }
}

fn release() -> ReleaseContext {
    ReleaseContext {
        version: "1.2.3".to_string(),
        ..ReleaseContext::default()
    }
}

// ── Hook dispatch ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_execute_other_hook_is_acknowledged_without_side_effects() {
    let runner = RecordingRunner::succeeding();
    let resolver = StaticResolver::new();
    let resp = execute(&runner, &resolver, &request(Hook::PrePublish, json!({}), false)).await;

    assert!(resp.success);
    assert_eq!(resp.message, "Hook pre-publish not handled");
    assert!(resp.outputs.is_none());
    assert!(runner.calls().is_empty());
    assert!(resolver.lookups().is_empty());
}

#[tokio::test]
async fn test_execute_rejects_shell_metacharacters_in_group_id() {
    let runner = RecordingRunner::succeeding();
    let resolver = StaticResolver::new();
    let config = json!({ "group_id": "com.example; rm -rf /", "artifact_id": "lib" });
    let resp = execute(&runner, &resolver, &request(Hook::PostPublish, config, false)).await;

    assert!(!resp.success);
    assert!(resp.error.as_deref().unwrap().contains("invalid group_id"));
    assert!(runner.calls().is_empty(), "maven must not run");
}

#[tokio::test]
async fn test_execute_missing_artifact_id_fails_before_build() {
    let runner = RecordingRunner::succeeding();
    let resolver = StaticResolver::new();
    let config = json!({ "group_id": "com.example" });
    let resp = execute(&runner, &resolver, &request(Hook::PostPublish, config, false)).await;

    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("artifact_id cannot be empty"));
    assert!(runner.calls().is_empty());
}

// ── Dry run ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_dry_run_previews_command_without_running() {
    let runner = RecordingRunner::succeeding();
    let resolver = StaticResolver::new();
    let config = json!({
        "group_id": "com.example",
        "artifact_id": "my-lib",
        "skip_tests": true,
        "settings": "s.xml",
        "profiles": ["release", "sign"],
        "repository": "http://localhost:8081/repo",
    });
    let resp = execute(&runner, &resolver, &request(Hook::PostPublish, config, true)).await;

    assert!(resp.success, "{resp:?}");
    assert_eq!(resp.message, "Would deploy Maven artifact");
    let outputs = resp.outputs.expect("outputs");
    assert_eq!(outputs["group_id"], "com.example");
    assert_eq!(outputs["artifact_id"], "my-lib");
    assert_eq!(outputs["version"], "1.2.3");
    assert_eq!(outputs["pom_path"], "pom.xml");
    assert_eq!(
        outputs["command"],
        "mvn deploy -f pom.xml -DskipTests -s s.xml -P release,sign"
    );
    assert_eq!(outputs["skip_tests"], true);
    assert_eq!(outputs["profiles"], json!(["release", "sign"]));
    assert!(runner.calls().is_empty());
    assert!(resolver.lookups().is_empty(), "localhost is never resolved");
}

#[tokio::test]
async fn test_dry_run_still_validates_paths() {
    let runner = RecordingRunner::succeeding();
    let resolver = StaticResolver::new();
    let mut cfg = base_config();
    cfg.pom_path = "../../etc/passwd".to_string();

    let outcome = deploy(&runner, &resolver, cfg, &release(), true).await;
    assert!(matches!(outcome, DeployOutcome::BuildFailed(_)));
    let resp: release_plugin_common::ExecuteResponse = outcome.into();
    assert!(resp.error.unwrap().starts_with("invalid pom_path: path traversal detected"));
}

// ── Real run ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_real_run_invokes_mvn_with_argv_and_credentials_in_env() {
    let runner = RecordingRunner::succeeding();
    let resolver = StaticResolver::new().with("repo.example.com", &["93.184.216.34"]);
    let mut cfg = base_config();
    cfg.username = "ci-bot".to_string();
    cfg.password = "s3cr3t".to_string();
    cfg.repository = "https://repo.example.com/releases".to_string();

    let outcome = deploy(&runner, &resolver, cfg, &release(), false).await;
    assert!(outcome.is_success(), "{outcome:?}");

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "mvn");
    assert_eq!(calls[0].args, vec!["deploy", "-f", "pom.xml"]);
    assert!(
        calls[0].args.iter().all(|a| !a.contains("s3cr3t")),
        "password must never appear in argv"
    );
    assert_eq!(
        calls[0].env,
        vec![
            ("MAVEN_USERNAME".to_string(), "ci-bot".to_string()),
            ("MAVEN_PASSWORD".to_string(), "s3cr3t".to_string()),
        ]
    );
    assert_eq!(resolver.lookups(), vec!["repo.example.com"]);

    let resp: release_plugin_common::ExecuteResponse = outcome.into();
    assert_eq!(resp.message, "Deployed Maven artifact com.example:my-lib:1.2.3");
    let outputs = resp.outputs.expect("outputs");
    assert_eq!(outputs.len(), 3);
    assert_eq!(outputs["version"], "1.2.3");
}

#[tokio::test]
async fn test_real_run_without_credentials_exports_nothing() {
    let runner = RecordingRunner::succeeding();
    let resolver = StaticResolver::new();

    let outcome = deploy(&runner, &resolver, base_config(), &release(), false).await;
    assert!(outcome.is_success());
    assert!(runner.calls()[0].env.is_empty());
}

#[tokio::test]
async fn test_non_zero_exit_reports_captured_output() {
    let runner = RecordingRunner::replying(|| {
        Ok(err_output(b"[INFO] Scanning\n", b"[ERROR] 401 Unauthorized\n"))
    });
    let resolver = StaticResolver::new();

    let outcome = deploy(&runner, &resolver, base_config(), &release(), false).await;
    assert!(matches!(outcome, DeployOutcome::ExecutionFailed(_)));
    let resp: release_plugin_common::ExecuteResponse = outcome.into();
    let error = resp.error.expect("error");
    assert!(error.starts_with("Maven deploy failed: "), "{error}");
    assert!(error.contains("\nOutput: [INFO] Scanning\n[ERROR] 401 Unauthorized"));
}

#[tokio::test]
async fn test_spawn_failure_is_execution_failure() {
    let runner = RecordingRunner::replying(|| {
        Err(anyhow::anyhow!("No such file or directory (os error 2)")
            .context("failed to spawn mvn"))
    });
    let resolver = StaticResolver::new();

    let resp: release_plugin_common::ExecuteResponse =
        deploy(&runner, &resolver, base_config(), &release(), false)
            .await
            .into();
    assert!(!resp.success);
    assert_eq!(
        resp.error.as_deref(),
        Some("Maven deploy failed: failed to spawn mvn: No such file or directory (os error 2)\nOutput: ")
    );
}

#[tokio::test]
async fn test_timeout_is_execution_failure() {
    let runner = RecordingRunner::replying(|| {
        Err(Interrupted {
            reason: RunError::TimedOut {
                operation: "mvn".to_string(),
                after: Duration::from_secs(1800),
            },
            stdout: b"[INFO] Uploading to nexus\n".to_vec(),
            stderr: b"[ERROR] upload stalled\n".to_vec(),
        }
        .into())
    });
    let resolver = StaticResolver::new();

    let resp: release_plugin_common::ExecuteResponse =
        deploy(&runner, &resolver, base_config(), &release(), false)
            .await
            .into();
    assert_eq!(
        resp.error.as_deref(),
        Some(
            "Maven deploy failed: mvn timed out after 1800s\n\
             Output: [INFO] Uploading to nexus\n[ERROR] upload stalled\n"
        )
    );
}

#[tokio::test]
async fn test_cancellation_reports_output_printed_so_far() {
    let runner = RecordingRunner::replying(|| {
        Err(Interrupted {
            reason: RunError::Cancelled {
                operation: "mvn".to_string(),
            },
            stdout: b"[INFO] Uploading to nexus\n".to_vec(),
            stderr: Vec::new(),
        }
        .into())
    });
    let resolver = StaticResolver::new();

    let outcome = deploy(&runner, &resolver, base_config(), &release(), false).await;
    let DeployOutcome::ExecutionFailed(err) = outcome else {
        panic!("expected an execution failure, got {outcome:?}");
    };
    let text = err.to_string();
    assert!(text.starts_with("Maven deploy failed: mvn was cancelled"), "{text}");
    assert!(text.ends_with("Output: [INFO] Uploading to nexus\n"), "{text}");
}

// ── Repository guard inside deploy ───────────────────────────────────────────

#[tokio::test]
async fn test_repository_resolving_to_metadata_endpoint_is_rejected() {
    let runner = RecordingRunner::succeeding();
    let resolver = StaticResolver::new().with("evil.example.com", &["169.254.169.254"]);
    let mut cfg = base_config();
    cfg.repository = "https://evil.example.com/repo".to_string();

    let outcome = deploy(&runner, &resolver, cfg, &release(), true).await;
    assert!(matches!(outcome, DeployOutcome::Rejected(_)));
    let resp: release_plugin_common::ExecuteResponse = outcome.into();
    assert_eq!(
        resp.error.as_deref(),
        Some("invalid repository URL: URLs pointing to private networks are not allowed")
    );
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_coordinates_are_checked_before_repository() {
    let runner = RecordingRunner::succeeding();
    let resolver = StaticResolver::new();
    let mut cfg = base_config();
    cfg.group_id = "$(whoami)".to_string();
    cfg.repository = "http://evil.example.com".to_string();

    let resp: release_plugin_common::ExecuteResponse =
        deploy(&runner, &resolver, cfg, &release(), false).await.into();
    assert!(resp.error.unwrap().contains("invalid group_id"));
    assert!(resolver.lookups().is_empty());
}
