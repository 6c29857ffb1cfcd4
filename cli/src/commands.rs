pub mod discover;

use std::time::Duration;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use netdiscover_common::config::{Config, Provider};

/// Environment variable that overrides `--provider`.
pub const PROVIDER_ENV: &str = "CLOUD_PROVIDER";

#[derive(Parser, Debug)]
#[command(name = "netdiscover", version)]
#[command(about = "Discover the hostname and addresses of this node.")]
pub struct CommandLine {
    /// Cloud provider metadata service to query: aws, azure, gcp, aliyun, digitalocean
    #[arg(long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Return only a single field
    #[arg(long, value_enum)]
    pub field: Option<Field>,

    /// Log per-field failures to stderr
    #[arg(long)]
    pub debug: bool,

    /// Per-request HTTP timeout
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Hostname,
    Privatev4,
    Publicv4,
    Publicv6,
}

impl CommandLine {
    /// Parses the process arguments. Help and version output also arrive as
    /// an error; see [`exit_status`].
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Builds the run configuration. A non-empty `env_provider` replaces
    /// `--provider` before either is validated.
    pub fn config(&self, env_provider: Option<String>) -> anyhow::Result<Config> {
        let provider = env_provider
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.provider.clone())
            .map(|name| name.parse::<Provider>().map_err(anyhow::Error::msg))
            .transpose()?;

        Ok(Config {
            provider,
            timeout: self.timeout.map(Duration::from_secs),
            debug: self.debug,
        })
    }
}

/// Process exit status for an argument error: success for help and version
/// output, failure for anything clap rejected.
pub fn exit_status(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
