//! Infrastructure implementation of the `HostResolver` port.

use std::net::IpAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

use crate::application::ports::{HostResolver, RunError};

pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves hosts through the system resolver (`getaddrinfo`), bounded by a
/// deadline and the process-wide cancellation token.
pub struct TokioHostResolver {
    timeout: Duration,
    cancel: CancellationToken,
}

impl TokioHostResolver {
    #[must_use]
    pub fn new(timeout: Duration, cancel: CancellationToken) -> Self {
        Self { timeout, cancel }
    }

    /// Race `lookup` against the deadline and the cancellation token.
    async fn bounded<T>(
        &self,
        operation: String,
        lookup: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        tokio::select! {
            result = lookup => result,
            () = tokio::time::sleep(self.timeout) => Err(RunError::TimedOut {
                operation,
                after: self.timeout,
            }
            .into()),
            () = self.cancel.cancelled() => Err(RunError::Cancelled { operation }.into()),
        }
    }
}

impl HostResolver for TokioHostResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>> {
        self.bounded(format!("resolving {host}"), async {
            let addrs = tokio::net::lookup_host((host, 0))
                .await
                .with_context(|| format!("lookup of {host} failed"))?;
            let mut ips: Vec<IpAddr> = Vec::new();
            for addr in addrs {
                if !ips.contains(&addr.ip()) {
                    ips.push(addr.ip());
                }
            }
            Ok(ips)
        })
        .await
    }
}
