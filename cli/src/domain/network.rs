//! Private-address classification for SSRF protection.
//!
//! The reserved ranges are an explicit table so the policy can be audited
//! line by line. New cloud metadata endpoints go in [`RESERVED_RANGES`].

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// An address block in CIDR form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cidr {
    V4(Ipv4Addr, u8),
    V6(Ipv6Addr, u8),
}

impl Cidr {
    /// Returns `true` if `ip` lies inside the block. Families never match
    /// across each other; callers canonicalise IPv4-mapped addresses first.
    #[must_use]
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (*self, ip) {
            (Cidr::V4(net, prefix), IpAddr::V4(ip)) => {
                let mask = prefix_mask_u32(prefix);
                u32::from(net) & mask == u32::from(ip) & mask
            }
            (Cidr::V6(net, prefix), IpAddr::V6(ip)) => {
                let mask = prefix_mask_u128(prefix);
                u128::from(net) & mask == u128::from(ip) & mask
            }
            _ => false,
        }
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cidr::V4(net, prefix) => write!(f, "{net}/{prefix}"),
            Cidr::V6(net, prefix) => write!(f, "{net}/{prefix}"),
        }
    }
}

fn prefix_mask_u32(prefix: u8) -> u32 {
    match prefix {
        0 => 0,
        p if p >= 32 => u32::MAX,
        p => u32::MAX << (32 - u32::from(p)),
    }
}

fn prefix_mask_u128(prefix: u8) -> u128 {
    match prefix {
        0 => 0,
        p if p >= 128 => u128::MAX,
        p => u128::MAX << (128 - u32::from(p)),
    }
}

/// A reserved block and the reason it is off limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedRange {
    pub block: Cidr,
    pub label: &'static str,
}

const fn v4(a: u8, b: u8, c: u8, d: u8, prefix: u8, label: &'static str) -> ReservedRange {
    ReservedRange {
        block: Cidr::V4(Ipv4Addr::new(a, b, c, d), prefix),
        label,
    }
}

const fn v6(segments: [u16; 8], prefix: u8, label: &'static str) -> ReservedRange {
    let [a, b, c, d, e, f, g, h] = segments;
    ReservedRange {
        block: Cidr::V6(Ipv6Addr::new(a, b, c, d, e, f, g, h), prefix),
        label,
    }
}

/// Ranges a repository URL must never resolve into.
///
/// Metadata endpoints come first so a match reports the most specific label.
pub static RESERVED_RANGES: &[ReservedRange] = &[
    // Cloud metadata endpoints
    v4(169, 254, 169, 254, 32, "cloud metadata (AWS/GCP/Azure)"),
    v6([0xfd00, 0x0ec2, 0, 0, 0, 0, 0, 0x0254], 128, "cloud metadata (AWS IMDS IPv6)"),
    // IPv4 private and special-purpose
    v4(10, 0, 0, 0, 8, "private (RFC 1918)"),
    v4(172, 16, 0, 0, 12, "private (RFC 1918)"),
    v4(192, 168, 0, 0, 16, "private (RFC 1918)"),
    v4(127, 0, 0, 0, 8, "loopback"),
    v4(169, 254, 0, 0, 16, "link-local"),
    v4(0, 0, 0, 0, 8, "this network"),
    v4(224, 0, 0, 0, 24, "link-local multicast"),
    // IPv6
    v6([0, 0, 0, 0, 0, 0, 0, 1], 128, "loopback"),
    v6([0, 0, 0, 0, 0, 0, 0, 0], 128, "unspecified"),
    v6([0xfe80, 0, 0, 0, 0, 0, 0, 0], 10, "link-local"),
    // Link-local multicast is scope 2 under every flags nibble (ffX2::/16).
    v6([0xff02, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xff12, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xff22, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xff32, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xff42, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xff52, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xff62, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xff72, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xff82, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xff92, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xffa2, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xffb2, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xffc2, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xffd2, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xffe2, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xfff2, 0, 0, 0, 0, 0, 0, 0], 16, "link-local multicast"),
    v6([0xfc00, 0, 0, 0, 0, 0, 0, 0], 7, "unique local (private)"),
];

/// Returns the first reserved range containing `ip`, if any.
///
/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are classified as IPv4.
#[must_use]
pub fn classify(ip: IpAddr) -> Option<&'static ReservedRange> {
    let ip = ip.to_canonical();
    RESERVED_RANGES.iter().find(|range| range.block.contains(ip))
}

/// Returns `true` if `ip` is private, reserved or a metadata endpoint.
#[must_use]
pub fn is_private(ip: IpAddr) -> bool {
    classify(ip).is_some()
}
