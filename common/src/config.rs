use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Cloud platforms with a known instance-metadata service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Aws,
    Azure,
    Gcp,
    Aliyun,
    DigitalOcean,
}

impl Provider {
    pub const ALL: [Provider; 5] = [
        Provider::Aws,
        Provider::Azure,
        Provider::Gcp,
        Provider::Aliyun,
        Provider::DigitalOcean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Aws => "aws",
            Provider::Azure => "azure",
            Provider::Gcp => "gcp",
            Provider::Aliyun => "aliyun",
            Provider::DigitalOcean => "digitalocean",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    /// Parses a provider name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Provider::ALL
            .into_iter()
            .find(|provider| provider.as_str() == lower)
            .ok_or_else(|| {
                format!("invalid provider: {s} (options are: aws, azure, gcp, aliyun, digitalocean)")
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Metadata service to query. `None` uses the generic discovery services.
    pub provider: Option<Provider>,
    /// Per-request HTTP timeout.
    ///
    /// When unset the HTTP client's own default applies.
    pub timeout: Option<Duration>,
    /// Report per-facet failures on the diagnostic stream.
    pub debug: bool,
}
