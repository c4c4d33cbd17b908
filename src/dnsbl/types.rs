use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::blacklist::BlacklistEntry;
use crate::endpoints::Endpoint;

/// One address to look up in one blacklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem<'a> {
    pub endpoint: &'a Endpoint,
    pub blacklist: &'a BlacklistEntry,
}

/// A confirmed blacklist hit.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub address: IpAddr,
    pub zone: String,
    pub description: String,
    /// The A record returned by the zone, usually in 127.0.0.0/8.
    pub listed_as: Ipv4Addr,
    /// First TXT record of the query name, empty when there is none.
    pub reason: String,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is listed in {}: {} ({})",
            self.address, self.zone, self.listed_as, self.reason
        )
    }
}

/// Result of one blacklist query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    NotListed,
    Listed(Listing),
    TimedOut,
    /// Any other lookup failure; counted as not listed.
    Failed(String),
}

/// A work item whose every attempt timed out.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedOutItem {
    pub address: IpAddr,
    pub origin: Option<String>,
    pub zone: String,
}

impl From<&WorkItem<'_>> for TimedOutItem {
    fn from(item: &WorkItem<'_>) -> Self {
        Self {
            address: item.endpoint.address,
            origin: item.endpoint.origin.clone(),
            zone: item.blacklist.zone.clone(),
        }
    }
}

/// Tally of a scheduler run over one destination's work set.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlacklistReport {
    pub listings: Vec<Listing>,
    pub not_listed: usize,
    pub unresolved: Vec<TimedOutItem>,
    /// Queries issued over all rounds.
    pub attempts: usize,
    pub rounds: usize,
}
