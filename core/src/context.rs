use std::fmt;
use std::sync::Arc;

use netdiscover_common::config::Config;
use netdiscover_common::network::interface::{InterfaceSource, SystemInterfaces};

use crate::dns::{ReverseResolver, SystemResolver};
use crate::http::{HttpTransport, ReqwestTransport};

/// Collaborators used by the fetch helpers and the generic strategies.
#[derive(Clone)]
pub struct DiscoveryContext {
    pub transport: Arc<dyn HttpTransport>,
    pub resolver: Arc<dyn ReverseResolver>,
    pub interfaces: Arc<dyn InterfaceSource>,
}

impl DiscoveryContext {
    /// System transport, resolver and interface enumeration.
    pub fn system(config: &Config) -> Self {
        Self {
            transport: Arc::new(ReqwestTransport::new(config.timeout)),
            resolver: Arc::new(SystemResolver),
            interfaces: Arc::new(SystemInterfaces),
        }
    }

    pub fn with_transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    pub fn with_resolver(mut self, resolver: impl ReverseResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    pub fn with_interfaces(mut self, interfaces: impl InterfaceSource + 'static) -> Self {
        self.interfaces = Arc::new(interfaces);
        self
    }
}

impl Default for DiscoveryContext {
    fn default() -> Self {
        Self::system(&Config::default())
    }
}

impl fmt::Debug for DiscoveryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveryContext").finish_non_exhaustive()
    }
}
