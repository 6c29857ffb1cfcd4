use std::io;
use std::net::IpAddr;

use tracing::{debug, trace};

/// Names shorter than this are not plausible public hostnames.
const MIN_NAME_LEN: usize = 6;

/// Reverse (PTR) resolution of an address into candidate names.
pub trait ReverseResolver: Send + Sync {
    fn lookup_addr(&self, addr: IpAddr) -> io::Result<Vec<String>>;
}

/// Resolves through the operating system resolver.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl ReverseResolver for SystemResolver {
    fn lookup_addr(&self, addr: IpAddr) -> io::Result<Vec<String>> {
        debug!(%addr, "reverse lookup");
        let name = dns_lookup::lookup_addr(&addr)?;
        // getnameinfo falls back to the numeric form when no PTR record exists
        if name.parse::<IpAddr>().is_ok() {
            return Ok(Vec::new());
        }
        Ok(vec![name])
    }
}

/// Picks the first plausible public hostname from reverse lookup results.
///
/// A candidate must be at least six characters, contain a dot and must not be
/// an mDNS `.local` name. One trailing dot is stripped from the result.
pub fn select_hostname<S: AsRef<str>>(names: &[S]) -> Option<String> {
    names.iter().find_map(|name| {
        let name: &str = name.as_ref();
        let trimmed = name.strip_suffix('.').unwrap_or(name);

        if name.len() < MIN_NAME_LEN {
            trace!(name, "implausibly short name");
            return None;
        }
        if !trimmed.contains('.') {
            trace!(name, "bare or local-only name");
            return None;
        }
        if trimmed.ends_with(".local") {
            trace!(name, "mDNS name");
            return None;
        }

        Some(trimmed.to_string())
    })
}
