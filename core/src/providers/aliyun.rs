//! Alibaba Cloud ECS instance metadata.

use crate::context::DiscoveryContext;
use crate::discoverer::{Discoverer, DiscovererOption};
use crate::http;

pub const PRIVATE_IPV4_URL: &str = "http://100.100.100.200/latest/meta-data/private-ipv4";
/// Elastic IP bound to the instance.
pub const PUBLIC_IPV4_URL: &str = "http://100.100.100.200/latest/meta-data/eipv4";
pub const HOSTNAME_URL: &str = "http://100.100.100.200/latest/meta-data/hostname";

pub fn options(context: &DiscoveryContext) -> Vec<DiscovererOption> {
    let transport = &context.transport;
    vec![
        DiscovererOption::PrivateIpv4(http::ip_facet(transport, PRIVATE_IPV4_URL, &[])),
        DiscovererOption::PublicIpv4(http::ip_facet(transport, PUBLIC_IPV4_URL, &[])),
        DiscovererOption::Hostname(http::hostname_facet(transport, HOSTNAME_URL, &[])),
    ]
}

pub fn discoverer(context: DiscoveryContext) -> Discoverer {
    let options = options(&context);
    Discoverer::with_context(context, options)
}
