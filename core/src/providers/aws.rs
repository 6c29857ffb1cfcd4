//! Amazon Web Services EC2 instance metadata.

use crate::context::DiscoveryContext;
use crate::discoverer::{Discoverer, DiscovererOption};
use crate::http;

pub const PRIVATE_IPV4_URL: &str = "http://169.254.169.254/latest/meta-data/local-ipv4";
pub const PUBLIC_IPV4_URL: &str = "http://169.254.169.254/latest/meta-data/public-ipv4";
pub const HOSTNAME_URL: &str = "http://169.254.169.254/latest/meta-data/public-hostname";

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
