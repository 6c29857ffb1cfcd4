use std::net::Ipv4Addr;

use pnet::datalink::{self, NetworkInterface};
use tracing::trace;

use crate::network::ip;

/// Enumerates local network interfaces.
///
/// Abstracted so the private address search can run against fixed interface lists.
pub trait InterfaceSource: Send + Sync {
    fn interfaces(&self) -> Vec<NetworkInterface>;
}

/// Reads interfaces from the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Vec<NetworkInterface> {
        datalink::interfaces()
    }
}

/// Finds the first global unicast IPv4 address across `interfaces`.
///
/// Interfaces and their addresses are walked in enumeration order. A loopback
/// address ends the scan of its interface; non-global-unicast and IPv6
/// addresses are skipped.
pub fn first_private_ipv4(interfaces: &[NetworkInterface]) -> Option<Ipv4Addr> {
    for interface in interfaces {
        for net in &interface.ips {
            let addr = net.ip();

            if addr.to_canonical().is_loopback() {
                trace!(interface = %interface.name, %addr, "loopback, skipping interface");
                break;
            }

            if !ip::is_global_unicast(&addr) {
                continue;
            }

            if let Some(ipv4) = ip::as_ipv4(&addr) {
                return Some(ipv4);
            }
        }
    }

    None
}
