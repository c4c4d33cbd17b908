use std::net::IpAddr;
use std::time::Duration;

use phf::phf_map;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use super::DnsError;

/// Well-known public resolver sets, selectable by name.
///
/// Some blacklists refuse queries relayed through large public resolvers,
/// which shows up as false negatives rather than errors.
pub static PUBLIC_RESOLVERS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "google" => &["8.8.8.8", "2001:4860:4860::8888", "8.8.4.4", "2001:4860:4860::8844"],
    "opendns" => &["208.67.222.222", "2620:0:ccc::2", "208.67.220.220", "2620:0:ccd::2"],
};

/// Process-wide resolver configuration, fixed once a run starts.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    nameservers: Vec<IpAddr>,
    timeout_ms: u64,
    attempts: usize,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            timeout_ms: 5_000,
            attempts: 2,
        }
    }
}

impl ResolverSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nameserver(mut self, address: IpAddr) -> Self {
        self.nameservers.push(address);
        self
    }

    pub fn with_nameservers<I>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = IpAddr>,
    {
        self.nameservers.extend(addresses);
        self
    }

    /// Appends one of the [`PUBLIC_RESOLVERS`] sets after any nameserver
    /// already configured.
    pub fn with_public_resolvers(self, preset: &str) -> Result<Self, DnsError> {
        let key = preset.trim().to_ascii_lowercase();
        let addresses = PUBLIC_RESOLVERS
            .get(key.as_str())
            .ok_or_else(|| DnsError::UnknownPreset {
                name: preset.to_string(),
            })?;
        // the table is static and only holds literal addresses
        let parsed = addresses.iter().filter_map(|raw| raw.parse::<IpAddr>().ok());
        Ok(self.with_nameservers(parsed))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis().try_into().unwrap_or(u64::MAX);
        self
    }

    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    /// Empty means "use the system configuration".
    pub fn nameservers(&self) -> &[IpAddr] {
        &self.nameservers
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }
}
