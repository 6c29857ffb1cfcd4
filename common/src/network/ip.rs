use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Returns `true` for unicast addresses usable beyond the local link.
///
/// Private ranges count as global unicast here; only unspecified, broadcast,
/// loopback, multicast and link-local addresses are rejected.
pub fn is_global_unicast(ip: &IpAddr) -> bool {
    match ip.to_canonical() {
        IpAddr::V4(ipv4) => is_global_unicast_v4(&ipv4),
        IpAddr::V6(ipv6) => is_global_unicast_v6(&ipv6),
    }
}

fn is_global_unicast_v4(ipv4: &Ipv4Addr) -> bool {
    !(ipv4.is_unspecified()
        || ipv4.is_broadcast()
        || ipv4.is_loopback()
        || ipv4.is_multicast()
        || ipv4.is_link_local())
}

fn is_global_unicast_v6(ipv6: &Ipv6Addr) -> bool {
    !(ipv6.is_unspecified()
        || ipv6.is_loopback()
        || ipv6.is_multicast()
        || ipv6.is_unicast_link_local())
}

/// Returns the IPv4 form of `ip`, unwrapping IPv4-mapped IPv6 addresses.
pub fn as_ipv4(ip: &IpAddr) -> Option<Ipv4Addr> {
    match ip.to_canonical() {
        IpAddr::V4(ipv4) => Some(ipv4),
        IpAddr::V6(_) => None,
    }
}
