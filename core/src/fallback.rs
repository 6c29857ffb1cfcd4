//! # Generic Discovery Strategies
//!
//! Provider-agnostic implementations used for every facet a provider bundle
//! does not override.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::Deserialize;
use tracing::debug;

use netdiscover_common::network::interface::{self, InterfaceSource};
use netdiscover_common::{DiscoverError, Result};

use crate::dns::{self, ReverseResolver};
use crate::http::{self, HttpTransport};
use crate::parse::{self, AddressFamily};

pub const PUBLIC_IPV4_URL: &str = "http://ipv4.jsonip.io";
pub const PUBLIC_IPV6_URL: &str = "http://ipv6.jsonip.io";

#[derive(Debug, Deserialize)]
struct JsonIpResponse {
    address: String,
}

/// Asks a "what is my IP" service for the address it sees.
pub fn public_ip_from_json<A: AddressFamily>(transport: &dyn HttpTransport, url: &str) -> Result<A> {
    let body = http::fetch(transport, url, &[])?;
    let response: JsonIpResponse =
        serde_json::from_slice(&body).map_err(|e| DiscoverError::Decode(e.to_string()))?;
    parse::parse_address(&response.address)
}

pub fn public_ipv4(transport: &dyn HttpTransport) -> Result<Ipv4Addr> {
    public_ip_from_json(transport, PUBLIC_IPV4_URL)
}

pub fn public_ipv6(transport: &dyn HttpTransport) -> Result<Ipv6Addr> {
    public_ip_from_json(transport, PUBLIC_IPV6_URL)
}

/// Picks the first global unicast IPv4 address of the local interfaces.
pub fn private_ipv4(source: &dyn InterfaceSource) -> Result<Ipv4Addr> {
    let interfaces = source.interfaces();
    debug!(count = interfaces.len(), "scanning local interfaces");
    interface::first_private_ipv4(&interfaces).ok_or(DiscoverError::AddressNotFound)
}

/// Reverse-resolves the address returned by `public_ipv4`.
pub fn hostname(
    public_ipv4: impl Fn() -> Result<Ipv4Addr>,
    resolver: &dyn ReverseResolver,
) -> Result<String> {
    let ip = IpAddr::V4(public_ipv4().map_err(|e| DiscoverError::PublicIp(Box::new(e)))?);

    let names = resolver
        .lookup_addr(ip)
        .map_err(|source| DiscoverError::ReverseLookup { ip, source })?;
    debug!(%ip, ?names, "reverse lookup results");

    dns::select_hostname(names.as_slice()).ok_or(DiscoverError::NameNotFound)
}
