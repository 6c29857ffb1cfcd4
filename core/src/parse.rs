//! # Response Parsers
//!
//! Turns raw metadata response bodies into validated addresses and hostnames.

use std::io::Read;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use netdiscover_common::network::ip;
use netdiscover_common::{DiscoverError, Result};

/// Shortest body accepted as a textual address (`"1.2.3.4\n"`).
pub const MIN_IP_BODY_LEN: usize = 8;
/// Longest body accepted as a textual address.
pub const MAX_IP_BODY_LEN: usize = 42;
/// Shortest hostname accepted from a metadata service.
pub const MIN_HOSTNAME_LEN: usize = 4;

/// An address type a parsed [`IpAddr`] can be narrowed to.
pub trait AddressFamily: Sized {
    const NAME: &'static str;

    fn from_ip(addr: IpAddr) -> Option<Self>;
}

impl AddressFamily for IpAddr {
    const NAME: &'static str = "IP";

    fn from_ip(addr: IpAddr) -> Option<Self> {
        Some(addr)
    }
}

impl AddressFamily for Ipv4Addr {
    const NAME: &'static str = "IPv4";

    fn from_ip(addr: IpAddr) -> Option<Self> {
        ip::as_ipv4(&addr)
    }
}

impl AddressFamily for Ipv6Addr {
    const NAME: &'static str = "IPv6";

    fn from_ip(addr: IpAddr) -> Option<Self> {
        match addr {
            IpAddr::V6(ipv6) => Some(ipv6),
            IpAddr::V4(_) => None,
        }
    }
}

/// Parses `text` as an address of family `A`.
pub fn parse_address<A: AddressFamily>(text: &str) -> Result<A> {
    let trimmed = text.trim();
    let addr: IpAddr = trimmed
        .parse()
        .map_err(|_| DiscoverError::InvalidAddress(trimmed.to_string()))?;

    A::from_ip(addr).ok_or(DiscoverError::AddressFamily {
        expected: A::NAME,
        found: addr,
    })
}

/// Reads a whole body and parses the address it contains.
///
/// Bodies shorter than [`MIN_IP_BODY_LEN`] or longer than [`MAX_IP_BODY_LEN`]
/// bytes are rejected before parsing.
pub fn parse_ip_from_body<A: AddressFamily>(mut body: impl Read) -> Result<A> {
    let mut data = Vec::new();
    body.read_to_end(&mut data).map_err(DiscoverError::Read)?;

    let text = String::from_utf8_lossy(&data);
    if !(MIN_IP_BODY_LEN..=MAX_IP_BODY_LEN).contains(&data.len()) {
        return Err(DiscoverError::InvalidResponse(text.into_owned()));
    }

    parse_address(&text)
}

pub fn parse_ipv4_from_body(body: impl Read) -> Result<Ipv4Addr> {
    parse_ip_from_body(body)
}

/// Reads a whole body as a hostname, trimming surrounding whitespace.
pub fn parse_hostname_from_body(mut body: impl Read) -> Result<String> {
    let mut data = Vec::new();
    body.read_to_end(&mut data).map_err(DiscoverError::Read)?;

    let hostname = String::from_utf8_lossy(&data).trim().to_string();
    if hostname.len() < MIN_HOSTNAME_LEN {
        return Err(DiscoverError::ShortHostname(hostname));
    }

    Ok(hostname)
}
