//! # HTTP Fetch Helpers
//!
//! A single GET against a metadata URL, a 2xx check, and the body handed to a
//! parser. Every provider goes through these helpers; provider modules only
//! contribute URLs and headers.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use netdiscover_common::{DiscoverError, Result};

use crate::discoverer::Facet;
use crate::parse::{self, AddressFamily};

/// Header name/value pairs attached to a metadata request.
pub type Headers = &'static [(&'static str, &'static str)];

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            reason: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes GET requests for the fetch helpers.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse>;
}

/// Blocking `reqwest` transport.
///
/// A client is built per request, so no connection outlives the call that
/// opened it.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    fn client(&self) -> reqwest::Result<Client> {
        // metadata services are link-local and must never be reached through a proxy
        let mut builder = Client::builder().no_proxy();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        debug!(url, headers = headers.len(), "GET");

        let client = self.client().map_err(|e| DiscoverError::transport(url, e))?;
        let mut request = client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().map_err(|e| DiscoverError::transport(url, e))?;
        let status = response.status();
        let body = response.bytes().map_err(|e| DiscoverError::transport(url, e))?;

        debug!(url, status = status.as_u16(), len = body.len(), "response");
        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}

/// Issues a GET and returns the body of a 2xx response.
pub fn fetch(transport: &dyn HttpTransport, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>> {
    let response = transport.get(url, headers)?;
    if !response.is_success() {
        return Err(DiscoverError::Status {
            status: response.status,
            reason: response.reason,
        });
    }
    Ok(response.body)
}

/// Queries `url` and returns the address contained in the response body.
pub fn standard_ip_from_http<A: AddressFamily>(
    transport: &dyn HttpTransport,
    url: &str,
    headers: &[(&str, &str)],
) -> Result<A> {
    let body = fetch(transport, url, headers)?;
    parse::parse_ip_from_body(body.as_slice())
}

/// Queries `url` and returns the hostname contained in the response body.
pub fn standard_hostname_from_http(
    transport: &dyn HttpTransport,
    url: &str,
    headers: &[(&str, &str)],
) -> Result<String> {
    let body = fetch(transport, url, headers)?;
    parse::parse_hostname_from_body(body.as_slice())
}

/// Binds [`standard_ip_from_http`] to a fixed URL and header set.
pub fn ip_facet<A>(transport: &Arc<dyn HttpTransport>, url: &'static str, headers: Headers) -> Facet<A>
where
    A: AddressFamily + 'static,
{
    let transport = Arc::clone(transport);
    Arc::new(move || standard_ip_from_http(transport.as_ref(), url, headers))
}

/// Binds [`standard_hostname_from_http`] to a fixed URL and header set.
pub fn hostname_facet(
    transport: &Arc<dyn HttpTransport>,
    url: &'static str,
    headers: Headers,
) -> Facet<String> {
    let transport = Arc::clone(transport);
    Arc::new(move || standard_hostname_from_http(transport.as_ref(), url, headers))
}
