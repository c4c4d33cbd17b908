use std::fmt;
use std::net::IpAddr;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// An address to check and the domain whose lookup produced it.
///
/// `origin` is `None` when the destination was a literal address.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub address: IpAddr,
    pub origin: Option<String>,
}

impl Endpoint {
    pub fn literal(address: IpAddr) -> Self {
        Self {
            address,
            origin: None,
        }
    }

    pub fn resolved(address: IpAddr, origin: impl Into<String>) -> Self {
        Self {
            address,
            origin: Some(origin.into()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Some(origin) => write!(f, "{}/{}", self.address, origin),
            None => write!(f, "{}", self.address),
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointOptions {
    follow_mx: bool,
}

impl Default for EndpointOptions {
    fn default() -> Self {
        Self { follow_mx: true }
    }
}

impl EndpointOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve MX records first and check the exchanges instead of the domain.
    pub fn follow_mx(mut self, value: bool) -> Self {
        self.follow_mx = value;
        self
    }

    pub fn follows_mx(&self) -> bool {
        self.follow_mx
    }
}
