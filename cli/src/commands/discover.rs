use std::process::ExitCode;

use serde::Serialize;
use tracing::warn;

use netdiscover_core::{Discoverer, Result};

use crate::commands::Field;

/// Everything discovered about the node. Failed facets are left empty.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct Response {
    /// Public hostname of the node
    pub hostname: String,
    /// Private (internal) IPv4 address of the node
    pub private_ipv4: String,
    /// Public (external) IPv4 address of the node
    pub public_ipv4: String,
    /// Public (external) IPv6 address of the node
    pub public_ipv6: String,
}

pub fn single(discoverer: &Discoverer, field: Field) -> ExitCode {
    match lookup(discoverer, field) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

pub fn full(discoverer: &Discoverer) -> ExitCode {
    let response = collect(discoverer);
    match serde_json::to_string(&response) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("failed to encode response: {response:?}: {err}");
            ExitCode::FAILURE
        }
    }
}

pub fn lookup(discoverer: &Discoverer, field: Field) -> Result<String> {
    match field {
        Field::Hostname => discoverer.hostname(),
        Field::Privatev4 => discoverer.private_ipv4().map(|ip| ip.to_string()),
        Field::Publicv4 => discoverer.public_ipv4().map(|ip| ip.to_string()),
        Field::Publicv6 => discoverer.public_ipv6().map(|ip| ip.to_string()),
    }
}

pub fn collect(discoverer: &Discoverer) -> Response {
    Response {
        hostname: or_empty(discoverer.hostname(), "hostname"),
        private_ipv4: or_empty(discoverer.private_ipv4(), "private IPv4 address"),
        public_ipv4: or_empty(discoverer.public_ipv4(), "public IPv4 address"),
        public_ipv6: or_empty(discoverer.public_ipv6(), "public IPv6 address"),
    }
}

fn or_empty<T: ToString>(result: Result<T>, what: &str) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(err) => {
            warn!("failed to get {what}: {err}");
            String::new()
        }
    }
}
