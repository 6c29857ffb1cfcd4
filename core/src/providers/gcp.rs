//! Google Cloud Platform compute metadata server.

use crate::context::DiscoveryContext;
use crate::discoverer::{Discoverer, DiscovererOption};
use crate::http::{self, Headers};

pub const PRIVATE_IPV4_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/network-interfaces/0/ip";
pub const PUBLIC_IPV4_URL: &str = "http://metadata.google.internal/computeMetadata/v1/instance/network-interfaces/0/access-configs/0/external-ip";
pub const HOSTNAME_URL: &str = "http://metadata.google.internal/computeMetadata/v1/instance/hostname";

pub const HEADERS: Headers = &[("Metadata-Flavor", "Google")];

pub fn options(context: &DiscoveryContext) -> Vec<DiscovererOption> {
    let transport = &context.transport;
    vec![
        DiscovererOption::PrivateIpv4(http::ip_facet(transport, PRIVATE_IPV4_URL, HEADERS)),
        DiscovererOption::PublicIpv4(http::ip_facet(transport, PUBLIC_IPV4_URL, HEADERS)),
        DiscovererOption::Hostname(http::hostname_facet(transport, HOSTNAME_URL, HEADERS)),
    ]
}

pub fn discoverer(context: DiscoveryContext) -> Discoverer {
    let options = options(&context);
    Discoverer::with_context(context, options)
}
