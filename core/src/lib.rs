//! Discovers a node's hostname, private IPv4 and public IPv4/IPv6 addresses from
//! cloud instance metadata or, without a known provider, from generic internet
//! services and the local interfaces.

pub mod context;
pub mod discoverer;
pub mod dns;
pub mod fallback;
pub mod http;
pub mod parse;
pub mod providers;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use context::DiscoveryContext;
pub use discoverer::{Discoverer, DiscovererOption, DiscovererOptions, Facet};
pub use netdiscover_common::config::{Config, Provider};
pub use netdiscover_common::{DiscoverError, ErrorKind, Result};
pub use providers::discoverer_for;
