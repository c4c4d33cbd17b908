#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use super::BlacklistError;

/// One DNSBL zone and what it lists.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlacklistEntry {
    pub zone: String,
    pub description: String,
}

impl BlacklistEntry {
    /// Normalizes `zone` to lower-case ASCII without the trailing root label.
    pub fn new(zone: &str, description: impl Into<String>) -> Result<Self, BlacklistError> {
        Ok(Self {
            zone: normalize_zone(zone, 0)?,
            description: description.into().trim().to_string(),
        })
    }
}

pub(crate) fn normalize_zone(zone: &str, line: u64) -> Result<String, BlacklistError> {
    let trimmed = zone.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return Err(BlacklistError::EmptyZone { line });
    }
    idna::domain_to_ascii(trimmed).map_err(|err| BlacklistError::idna(trimmed, err))
}

const DEFAULT_BLACKLISTS: &[(&str, &str)] = &[
    ("zen.spamhaus.org", "Spamhaus SBL, XBL and PBL"),
    ("dnsbl.sorbs.net", "SORBS aggregated"),
    ("safe.dnsbl.sorbs.net", "'safe' subset of SORBS aggregated"),
    ("ix.dnsbl.manitu.net", "Heise iX NiX Spam"),
    ("babl.rbl.webiron.net", "Bad Abuse"),
    ("cabl.rbl.webiron.net", "Chronicly Bad Abuse"),
    ("truncate.gbudb.net", "Exclusively Spam/Malware"),
    ("dnsbl-1.uceprotect.net", "Trapserver Cluster"),
    ("cbl.abuseat.org", "Net of traps"),
    ("dnsbl.cobion.com", "used in IBM products"),
    ("psbl.surriel.com", "passive list, easy to unlist"),
    ("dnsrbl.org", "Real-time black list"),
    ("db.wpbl.info", "Weighted private"),
    ("bl.spamcop.net", "Based on spamcop users"),
    ("dyna.spamrats.com", "Dynamic IP addresses"),
    ("spam.spamrats.com", "Manual submissions"),
    ("auth.spamrats.com", "Suspicious authentications"),
    ("dnsbl.inps.de", "automated and reported"),
    ("bl.blocklist.de", "fail2ban reports etc."),
    ("srnblack.surgate.net", "feeders"),
    ("all.s5h.net", "traps"),
    ("rbl.realtimeblacklist.com", "lists ip ranges"),
    ("b.barracudacentral.org", "traps"),
    ("dnsbl.spfbl.net", "Reputation Database"),
    ("hostkarma.junkemailfilter.com", "Autotected Virus Senders"),
    ("rbl.megarbl.net", "Curated Spamtraps"),
    ("ubl.unsubscore.com", "Collected Opt-Out Addresses"),
    ("0spam.fusionzero.com", "Spam Trap"),
];

/// The built-in blacklist table, in query order.
pub fn default_blacklists() -> Vec<BlacklistEntry> {
    DEFAULT_BLACKLISTS
        .iter()
        .map(|(zone, description)| BlacklistEntry {
            zone: (*zone).to_string(),
            description: (*description).to_string(),
        })
        .collect()
}

/// Ordered list of blacklists for one run. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistSet {
    entries: Vec<BlacklistEntry>,
}

impl Default for BlacklistSet {
    fn default() -> Self {
        Self {
            entries: default_blacklists(),
        }
    }
}

impl BlacklistSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn clear(mut self) -> Self {
        self.entries.clear();
        self
    }

    /// Appends a zone without description.
    pub fn add(mut self, zone: &str) -> Result<Self, BlacklistError> {
        self.entries.push(BlacklistEntry::new(zone, "")?);
        Ok(self)
    }

    pub fn extend<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = BlacklistEntry>,
    {
        self.entries.extend(entries);
        self
    }

    pub fn entries(&self) -> &[BlacklistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
