//! DigitalOcean droplet metadata.
//!
//! The private IPv4 and floating IP endpoints are kept for callers that want
//! them, but they are not part of the bundle: the private address endpoint is
//! unverified and has not been seen populated on live droplets, so private IPv4
//! falls through to interface enumeration.

use std::net::Ipv4Addr;

use netdiscover_common::Result;

use crate::context::DiscoveryContext;
use crate::discoverer::{Discoverer, DiscovererOption};
use crate::http::{self, HttpTransport};

pub const HOSTNAME_URL: &str = "http://169.254.169.254/metadata/v1/hostname";
pub const PUBLIC_IPV4_URL: &str = "http://169.254.169.254/metadata/v1/interfaces/public/0/ipv4/address";
pub const PUBLIC_IPV6_URL: &str = "http://169.254.169.254/metadata/v1/interfaces/public/0/ipv6/address";
pub const PRIVATE_IPV4_URL: &str =
    "http://169.254.169.254/metadata/v1/interfaces/private/0/ipv4/address";
pub const FLOATING_IPV4_ACTIVE_URL: &str = "http://169.254.169.254/metadata/v1/floating_ip/ipv4/active";
pub const FLOATING_IPV4_URL: &str =
    "http://169.254.169.254/metadata/v1/interfaces/public/0/anchor_ipv4/address";

pub fn options(context: &DiscoveryContext) -> Vec<DiscovererOption> {
    let transport = &context.transport;
    vec![
        DiscovererOption::Hostname(http::hostname_facet(transport, HOSTNAME_URL, &[])),
        DiscovererOption::PublicIpv4(http::ip_facet(transport, PUBLIC_IPV4_URL, &[])),
        DiscovererOption::PublicIpv6(http::ip_facet(transport, PUBLIC_IPV6_URL, &[])),
    ]
}

pub fn discoverer(context: DiscoveryContext) -> Discoverer {
    let options = options(&context);
    Discoverer::with_context(context, options)
}

/// Private address from the droplet metadata.
///
/// Unverified: droplets without private networking leave this endpoint empty.
pub fn private_ipv4(transport: &dyn HttpTransport) -> Result<Ipv4Addr> {
    http::standard_ip_from_http(transport, PRIVATE_IPV4_URL, &[])
}

/// Anchor address behind an active floating IP, or `None` when no floating IP
/// is assigned.
///
/// Unverified against live droplets.
pub fn floating_public_ipv4(transport: &dyn HttpTransport) -> Result<Option<Ipv4Addr>> {
    let active = http::fetch(transport, FLOATING_IPV4_ACTIVE_URL, &[])?;
    if String::from_utf8_lossy(&active).trim() != "true" {
        return Ok(None);
    }
    http::standard_ip_from_http(transport, FLOATING_IPV4_URL, &[]).map(Some)
}
