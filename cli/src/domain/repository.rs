//! Pure half of the repository URL guard.
//!
//! Parsing, scheme policy and address classification live here. Name
//! resolution is I/O and is done by the application layer, which feeds the
//! resolved addresses back into [`check_resolved`].

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use url::{Host, Url};

use crate::domain::error::RepositoryError;
use crate::domain::network;

/// What remains to be checked after a URL passes the static rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryTarget {
    /// Nothing to resolve: the field is empty or the host is loopback.
    Accepted,
    /// The host is an IP literal; classify it directly.
    Address(IpAddr),
    /// The host is a DNS name; resolve it and classify every address.
    Domain(String),
}

/// Returns `true` for the loopback spellings that may use plain HTTP.
#[must_use]
pub fn is_localhost(host: &Host<&str>) -> bool {
    match host {
        Host::Domain(name) => *name == "localhost",
        Host::Ipv4(addr) => *addr == Ipv4Addr::LOCALHOST,
        Host::Ipv6(addr) => *addr == Ipv6Addr::LOCALHOST,
    }
}

/// Apply the parse and scheme rules to a raw repository URL.
///
/// Loopback hosts may use any scheme and skip the private-network check,
/// since traffic to them cannot reach another machine.
///
/// # Errors
///
/// Returns [`RepositoryError::InvalidUrl`] if the URL does not parse or has
/// no host, and [`RepositoryError::InsecureScheme`] for non-HTTPS URLs to
/// anything other than loopback.
pub fn inspect_url(raw: &str) -> Result<RepositoryTarget, RepositoryError> {
    if raw.is_empty() {
        return Ok(RepositoryTarget::Accepted);
    }

    let url = Url::parse(raw).map_err(|e| RepositoryError::InvalidUrl(e.to_string()))?;
    let host = url.host();

    let localhost = host.as_ref().is_some_and(is_localhost);
    if url.scheme() != "https" && !localhost {
        return Err(RepositoryError::InsecureScheme {
            scheme: url.scheme().to_string(),
        });
    }
    if localhost {
        return Ok(RepositoryTarget::Accepted);
    }

    match host {
        Some(Host::Domain(name)) => Ok(RepositoryTarget::Domain(name.to_string())),
        Some(Host::Ipv4(addr)) => Ok(RepositoryTarget::Address(IpAddr::V4(addr))),
        Some(Host::Ipv6(addr)) => Ok(RepositoryTarget::Address(IpAddr::V6(addr))),
        None => Err(RepositoryError::InvalidUrl("missing host".to_string())),
    }
}

/// Reject the target if any of `addrs` is private or reserved.
///
/// # Errors
///
/// Returns [`RepositoryError::Resolution`] when `addrs` is empty and
/// [`RepositoryError::PrivateNetwork`] for the first reserved address.
pub fn check_resolved(host: &str, addrs: &[IpAddr]) -> Result<(), RepositoryError> {
    if addrs.is_empty() {
        return Err(RepositoryError::Resolution {
            host: host.to_string(),
            reason: format!("no addresses found for {host}"),
        });
    }
    for addr in addrs {
        if let Some(range) = network::classify(*addr) {
            return Err(RepositoryError::PrivateNetwork {
                host: host.to_string(),
                addr: *addr,
                range: range.label,
            });
        }
    }
    Ok(())
}
