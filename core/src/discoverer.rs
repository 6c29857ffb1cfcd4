//! # Discoverer
//!
//! The composition root. A [`Discoverer`] holds one function per facet. Each
//! facet can be overridden through a [`DiscovererOption`]; anything left unset
//! falls back to the generic strategies in [`crate::fallback`].
//!
//! Defaults are resolved only after every option has been applied. The hostname
//! default reverse-resolves whatever the final public IPv4 facet returns, so a
//! provider that overrides public IPv4 but not hostname gets a reverse lookup of
//! its own address.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use netdiscover_common::{DiscoverError, Result};

use crate::context::DiscoveryContext;
use crate::fallback;

/// A nullary discovery function for one facet.
pub type Facet<T> = Arc<dyn Fn() -> Result<T> + Send + Sync>;

/// Overrides exactly one facet of a [`Discoverer`].
#[derive(Clone)]
pub enum DiscovererOption {
    Hostname(Facet<String>),
    PrivateIpv4(Facet<Ipv4Addr>),
    PublicIpv4(Facet<Ipv4Addr>),
    PublicIpv6(Facet<Ipv6Addr>),
}

impl DiscovererOption {
    pub fn hostname(f: impl Fn() -> Result<String> + Send + Sync + 'static) -> Self {
        Self::Hostname(Arc::new(f))
    }

    pub fn private_ipv4(f: impl Fn() -> Result<Ipv4Addr> + Send + Sync + 'static) -> Self {
        Self::PrivateIpv4(Arc::new(f))
    }

    pub fn public_ipv4(f: impl Fn() -> Result<Ipv4Addr> + Send + Sync + 'static) -> Self {
        Self::PublicIpv4(Arc::new(f))
    }

    pub fn public_ipv6(f: impl Fn() -> Result<Ipv6Addr> + Send + Sync + 'static) -> Self {
        Self::PublicIpv6(Arc::new(f))
    }

    fn facet(&self) -> &'static str {
        match self {
            Self::Hostname(_) => "hostname",
            Self::PrivateIpv4(_) => "private IPv4",
            Self::PublicIpv4(_) => "public IPv4",
            Self::PublicIpv6(_) => "public IPv6",
        }
    }
}

impl fmt::Debug for DiscovererOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DiscovererOption").field(&self.facet()).finish()
    }
}

/// Facets collected while a [`Discoverer`] is being built.
pub struct DiscovererOptions {
    context: DiscoveryContext,
    hostname: Option<Facet<String>>,
    private_ipv4: Facet<Ipv4Addr>,
    public_ipv4: Facet<Ipv4Addr>,
    public_ipv6: Facet<Ipv6Addr>,
}

impl DiscovererOptions {
    /// Generic strategies for every facet except hostname, which is resolved in
    /// [`DiscovererOptions::finish`].
    pub fn new(context: DiscoveryContext) -> Self {
        let interfaces = Arc::clone(&context.interfaces);
        let v4_transport = Arc::clone(&context.transport);
        let v6_transport = Arc::clone(&context.transport);

        Self {
            hostname: None,
            private_ipv4: Arc::new(move || fallback::private_ipv4(interfaces.as_ref())),
            public_ipv4: Arc::new(move || fallback::public_ipv4(v4_transport.as_ref())),
            public_ipv6: Arc::new(move || fallback::public_ipv6(v6_transport.as_ref())),
            context,
        }
    }

    pub fn apply(&mut self, option: DiscovererOption) {
        match option {
            DiscovererOption::Hostname(f) => self.hostname = Some(f),
            DiscovererOption::PrivateIpv4(f) => self.private_ipv4 = f,
            DiscovererOption::PublicIpv4(f) => self.public_ipv4 = f,
            DiscovererOption::PublicIpv6(f) => self.public_ipv6 = f,
        }
    }

    pub fn finish(self) -> Discoverer {
        let hostname = match self.hostname {
            Some(hostname) => hostname,
            None => {
                let public_ipv4 = Arc::clone(&self.public_ipv4);
                let resolver = Arc::clone(&self.context.resolver);
                let hostname: Facet<String> =
                    Arc::new(move || fallback::hostname(|| public_ipv4(), resolver.as_ref()));
                hostname
            }
        };

        Discoverer {
            hostname: Some(hostname),
            private_ipv4: Some(self.private_ipv4),
            public_ipv4: Some(self.public_ipv4),
            public_ipv6: Some(self.public_ipv6),
        }
    }
}

/// Discovers the hostname and addresses of the current node.
///
/// Every accessor is independent and may be called from several threads at
/// once. A `Discoverer::default()` has no facets and fails every call with
/// [`DiscoverError::NotInitialized`].
#[derive(Clone, Default)]
pub struct Discoverer {
    hostname: Option<Facet<String>>,
    private_ipv4: Option<Facet<Ipv4Addr>>,
    public_ipv4: Option<Facet<Ipv4Addr>>,
    public_ipv6: Option<Facet<Ipv6Addr>>,
}

impl Discoverer {
    /// Builds a discoverer on the system collaborators.
    pub fn new(options: impl IntoIterator<Item = DiscovererOption>) -> Self {
        Self::with_context(DiscoveryContext::default(), options)
    }

    pub fn with_context(
        context: DiscoveryContext,
        options: impl IntoIterator<Item = DiscovererOption>,
    ) -> Self {
        let mut config = DiscovererOptions::new(context);
        for option in options {
            config.apply(option);
        }
        config.finish()
    }

    /// Returns the public hostname.
    pub fn hostname(&self) -> Result<String> {
        call(&self.hostname, "hostname")
    }

    /// Returns the private (internal) IPv4 address.
    pub fn private_ipv4(&self) -> Result<Ipv4Addr> {
        call(&self.private_ipv4, "private IPv4")
    }

    /// Returns the public (external) IPv4 address.
    pub fn public_ipv4(&self) -> Result<Ipv4Addr> {
        call(&self.public_ipv4, "public IPv4")
    }

    /// Returns the public (external) IPv6 address.
    pub fn public_ipv6(&self) -> Result<Ipv6Addr> {
        call(&self.public_ipv6, "public IPv6")
    }
}

fn call<T>(facet: &Option<Facet<T>>, name: &'static str) -> Result<T> {
    match facet {
        Some(f) => f(),
        None => Err(DiscoverError::NotInitialized { facet: name }),
    }
}

impl fmt::Debug for Discoverer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discoverer")
            .field("hostname", &self.hostname.is_some())
            .field("private_ipv4", &self.private_ipv4.is_some())
            .field("public_ipv4", &self.public_ipv4.is_some())
            .field("public_ipv6", &self.public_ipv6.is_some())
            .finish()
    }
}
