//! # Provider Strategy Bundles
//!
//! One module per cloud provider. Each module only declares its metadata URLs
//! and headers and binds them to the shared fetch helpers.

pub mod aliyun;
pub mod aws;
pub mod azure;
pub mod digitalocean;
pub mod gcp;

use netdiscover_common::config::Provider;
use tracing::debug;

use crate::context::DiscoveryContext;
use crate::discoverer::{Discoverer, DiscovererOption};

/// Facet overrides for `provider`.
pub fn options(provider: Provider, context: &DiscoveryContext) -> Vec<DiscovererOption> {
    match provider {
        Provider::Aws => aws::options(context),
        Provider::Azure => azure::options(context),
        Provider::Gcp => gcp::options(context),
        Provider::Aliyun => aliyun::options(context),
        Provider::DigitalOcean => digitalocean::options(context),
    }
}

/// Builds the discoverer for `provider`, or the generic one when `None`.
pub fn discoverer_for(provider: Option<Provider>, context: DiscoveryContext) -> Discoverer {
    debug!(provider = provider.map(|p| p.as_str()).unwrap_or("generic"), "building discoverer");
    match provider {
        Some(provider) => {
            let options = options(provider, &context);
            Discoverer::with_context(context, options)
        }
        None => Discoverer::with_context(context, []),
    }
}
