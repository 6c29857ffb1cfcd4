//! # Discovery Errors
//!
//! Every facet returns its outcome as a [`DiscoverError`]. Failures are local to the
//! facet that produced them and are never fatal to the process; the caller decides.

use std::error::Error as StdError;
use std::net::IpAddr;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiscoverError>;

/// Coarse classification of a [`DiscoverError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be built, sent, or read.
    Transport,
    /// The upstream answered with a non-2xx status.
    Protocol,
    /// The response body failed structural validation.
    Validation,
    /// Nothing qualifying was found.
    NotFound,
    /// The discoverer was used without being constructed.
    NotInitialized,
}

#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("request to {url} failed: {}", causes(&**.source))]
    Transport {
        url: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("failed to read response: {0}")]
    Read(#[source] std::io::Error),

    #[error("non-2XX response: ({status}) {reason}")]
    Status { status: u16, reason: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("failed to parse IP: {0}")]
    InvalidAddress(String),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("expected an {expected} address, got {found}")]
    AddressFamily { expected: &'static str, found: IpAddr },

    #[error("hostname implausibly short: {0}")]
    ShortHostname(String),

    #[error("valid address not found")]
    AddressNotFound,

    #[error("failed to obtain public IP: {0}")]
    PublicIp(#[source] Box<DiscoverError>),

    #[error("failed to reverse-lookup ip address {ip}: {source}")]
    ReverseLookup {
        ip: IpAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to discover valid public name")]
    NameNotFound,

    #[error("discoverer not initialized: no {facet} discoverer")]
    NotInitialized { facet: &'static str },
}

impl DiscoverError {
    pub fn transport(url: &str, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Transport {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } | Self::Read(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Protocol,
            Self::InvalidResponse(_)
            | Self::InvalidAddress(_)
            | Self::Decode(_)
            | Self::AddressFamily { .. }
            | Self::ShortHostname(_) => ErrorKind::Validation,
            Self::AddressNotFound | Self::NameNotFound | Self::ReverseLookup { .. } => {
                ErrorKind::NotFound
            }
            Self::PublicIp(inner) => inner.kind(),
            Self::NotInitialized { .. } => ErrorKind::NotInitialized,
        }
    }
}

/// Renders `err` followed by every underlying cause, `: `-separated.
///
/// HTTP client errors keep the interesting part (refused, timed out) in the
/// source chain rather than in their own message.
fn causes(err: &(dyn StdError + Send + Sync + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut next = err.source();
    while let Some(cause) = next {
        let text = cause.to_string();
        if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        next = cause.source();
    }
    rendered
}
