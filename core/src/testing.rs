//! Recording fakes for the discovery collaborators.
//!
//! Built for this crate's unit tests and exported with the `testing` feature.

use std::collections::HashMap;
use std::io;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

use netdiscover_common::network::interface::InterfaceSource;
use netdiscover_common::{DiscoverError, Result};

use crate::dns::ReverseResolver;
use crate::http::{HttpResponse, HttpTransport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// Answers from a fixed URL table; unknown URLs fail as unreachable.
#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<String, HttpResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, response: HttpResponse) -> Self {
        self.routes.lock().unwrap().insert(url.to_string(), response);
        self
    }

    /// Answers `url` with a 200 carrying `body`.
    pub fn with_body(self, url: &str, body: &str) -> Self {
        self.respond(url, HttpResponse::ok(body))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|request| request.url).collect()
    }

    pub fn clear(&self) {
        self.requests.lock().unwrap().clear();
    }
}

impl RecordedRequest {
    pub fn new(url: &str, headers: &[(&str, &str)]) -> Self {
        Self {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl HttpTransport for MockTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(RecordedRequest::new(url, headers));
        self.routes
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| DiscoverError::transport(url, "connection refused"))
    }
}

#[derive(Clone, Default)]
pub struct MockResolver {
    answers: Arc<Mutex<HashMap<IpAddr, Vec<String>>>>,
    lookups: Arc<Mutex<Vec<IpAddr>>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, addr: &str, names: &[&str]) -> Self {
        self.answers.lock().unwrap().insert(
            addr.parse().unwrap(),
            names.iter().map(|name| name.to_string()).collect(),
        );
        self
    }

    pub fn lookups(&self) -> Vec<IpAddr> {
        self.lookups.lock().unwrap().clone()
    }
}

impl ReverseResolver for MockResolver {
    fn lookup_addr(&self, addr: IpAddr) -> io::Result<Vec<String>> {
        self.lookups.lock().unwrap().push(addr);
        self.answers
            .lock()
            .unwrap()
            .get(&addr)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no PTR record"))
    }
}

/// Fixed interface list that counts how often it was enumerated.
#[derive(Clone, Default)]
pub struct MockInterfaces {
    interfaces: Vec<NetworkInterface>,
    enumerations: Arc<Mutex<usize>>,
}

impl MockInterfaces {
    /// One interface per address, in the given order.
    pub fn with_addresses(cidrs: &[&str]) -> Self {
        cidrs
            .iter()
            .enumerate()
            .fold(Self::default(), |mock, (idx, cidr)| mock.interface(&format!("eth{idx}"), &[*cidr]))
    }

    /// Appends an interface carrying `cidrs`, in order.
    pub fn interface(mut self, name: &str, cidrs: &[&str]) -> Self {
        self.interfaces.push(NetworkInterface {
            name: name.to_string(),
            description: String::new(),
            index: self.interfaces.len() as u32,
            mac: None,
            ips: cidrs.iter().map(|cidr| cidr.parse::<IpNetwork>().unwrap()).collect(),
            flags: 1,
        });
        self
    }

    pub fn enumerations(&self) -> usize {
        *self.enumerations.lock().unwrap()
    }
}

impl InterfaceSource for MockInterfaces {
    fn interfaces(&self) -> Vec<NetworkInterface> {
        *self.enumerations.lock().unwrap() += 1;
        self.interfaces.clone()
    }
}
