//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution with a guaranteed kill on timeout or
//! cancellation on all platforms.

use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::sync::CancellationToken;

use crate::application::ports::{CommandRunner, Interrupted, RunError};

/// Default deadline for `mvn deploy`; uploads to remote repositories are slow.
pub const DEFAULT_CMD_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// How long to keep reading the pipes after the child has been killed.
/// Grandchildren may still hold them open.
const DRAIN_GRACE: Duration = Duration::from_millis(500);

/// Production `CommandRunner`.
///
/// `tokio::time::timeout` around `.output().await` only drops the future when
/// the deadline fires; the OS process keeps running. The child is killed
/// explicitly on timeout and on cancellation, and whatever it printed up to
/// that point is returned inside [`Interrupted`].
pub struct TokioCommandRunner {
    timeout: Duration,
    cancel: CancellationToken,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Duration, cancel: CancellationToken) -> Self {
        Self { timeout, cancel }
    }
}

/// Append everything `pipe` yields to `buf`. Reads chunk by chunk, so bytes
/// already read stay in `buf` if the future is dropped.
async fn drain<R: AsyncRead + Unpin>(pipe: &mut Option<R>, buf: &mut Vec<u8>) {
    let Some(pipe) = pipe.as_mut() else {
        return;
    };
    let mut chunk = [0u8; 8192];
    loop {
        match pipe.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str], env: &[(&str, &str)]) -> Result<Output> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .envs(env.iter().copied())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_pipe = child.stdout.take();
        let mut stderr_pipe = child.stderr.take();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let reason = tokio::select! {
            status = async {
                let (status, (), ()) = tokio::join!(
                    child.wait(),
                    drain(&mut stdout_pipe, &mut stdout),
                    drain(&mut stderr_pipe, &mut stderr),
                );
                status
            } => {
                let status = status.with_context(|| format!("waiting for {program}"))?;
                return Ok(Output { status, stdout, stderr });
            }
            () = tokio::time::sleep(self.timeout) => RunError::TimedOut {
                operation: program.to_string(),
                after: self.timeout,
            },
            () = self.cancel.cancelled() => RunError::Cancelled {
                operation: program.to_string(),
            },
        };

        let _ = child.kill().await;
        let _ = tokio::time::timeout(DRAIN_GRACE, async {
            tokio::join!(
                drain(&mut stdout_pipe, &mut stdout),
                drain(&mut stderr_pipe, &mut stderr),
            )
        })
        .await;
        tracing::debug!(%reason, captured = stdout.len() + stderr.len(), "child killed");

        Err(Interrupted {
            reason,
            stdout,
            stderr,
        }
        .into())
    }
}
