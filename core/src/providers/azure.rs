//! Microsoft Azure instance metadata service.
//!
//! Azure exposes no hostname or IPv6 endpoint, so those facets use the generic
//! strategies.

use crate::context::DiscoveryContext;
use crate::discoverer::{Discoverer, DiscovererOption};
use crate::http::{self, Headers};

pub const PRIVATE_IPV4_URL: &str = "http://169.254.169.254/metadata/instance/network/interface/0/ipv4/ipAddress/0/privateIpAddress?api-version=2017-08-01&format=text";
pub const PUBLIC_IPV4_URL: &str = "http://169.254.169.254/metadata/instance/network/interface/0/ipv4/ipAddress/0/publicIpAddress?api-version=2017-08-01&format=text";

pub const HEADERS: Headers = &[("Metadata", "true")];

pub fn options(context: &DiscoveryContext) -> Vec<DiscovererOption> {
    let transport = &context.transport;
    vec![
        DiscovererOption::PrivateIpv4(http::ip_facet(transport, PRIVATE_IPV4_URL, HEADERS)),
        DiscovererOption::PublicIpv4(http::ip_facet(transport, PUBLIC_IPV4_URL, HEADERS)),
    ]
}

pub fn discoverer(context: DiscoveryContext) -> Discoverer {
    let options = options(&context);
    Discoverer::with_context(context, options)
}
