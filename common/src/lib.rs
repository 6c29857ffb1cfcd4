pub mod config;
pub mod error;
pub mod network;

pub use error::{DiscoverError, ErrorKind, Result};
