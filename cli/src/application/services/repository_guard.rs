//! Application service: SSRF guard for the repository URL.
//!
//! Composes the pure URL rules from `crate::domain::repository` with the
//! [`HostResolver`] port. Addresses are checked once, here; Maven resolves
//! the name again when it connects.

use crate::application::ports::HostResolver;
use crate::domain::error::RepositoryError;
use crate::domain::repository::{RepositoryTarget, check_resolved, inspect_url};

/// Validate a repository URL against the scheme and private-network rules.
///
/// # Errors
///
/// Returns the first [`RepositoryError`]: malformed URL, insecure scheme,
/// resolution failure, or a host that maps to a reserved address.
pub async fn validate_repository_url(
    resolver: &impl HostResolver,
    raw: &str,
) -> Result<(), RepositoryError> {
    match inspect_url(raw)? {
        RepositoryTarget::Accepted => Ok(()),
        RepositoryTarget::Address(addr) => check_resolved(&addr.to_string(), &[addr]),
        RepositoryTarget::Domain(host) => {
            let addrs = resolver
                .resolve(&host)
                .await
                .map_err(|e| RepositoryError::Resolution {
                    host: host.clone(),
                    reason: format!("{e:#}"),
                })?;
            tracing::debug!(%host, ?addrs, "resolved repository host");
            check_resolved(&host, &addrs)
        }
    }
}
