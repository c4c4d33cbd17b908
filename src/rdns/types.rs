use std::fmt;
use std::net::IpAddr;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(tag = "kind", rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchKind {
    NoReverseRecord,
    ReverseMismatch { target: String },
}

/// One failed reverse-DNS consistency check.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseMismatch {
    pub address: IpAddr,
    pub origin: Option<String>,
    pub kind: MismatchKind,
}

impl fmt::Display for ReverseMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.origin) {
            (MismatchKind::NoReverseRecord, _) => {
                write!(f, "there is no reverse DNS record for {}", self.address)
            }
            (MismatchKind::ReverseMismatch { target }, Some(origin)) => write!(
                f,
                "domain {} resolves to {}, but the reverse record resolves to {}",
                origin, self.address, target
            ),
            (MismatchKind::ReverseMismatch { target }, None) => write!(
                f,
                "the reverse record of {} resolves to {}",
                self.address, target
            ),
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseCheckOptions {
    enabled: bool,
    stop_at_first_missing: bool,
}

impl Default for ReverseCheckOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            stop_at_first_missing: true,
        }
    }
}

impl ReverseCheckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = value;
        self
    }

    /// When set (the default), the first address without any PTR record ends
    /// the check for its destination and the remaining addresses are skipped.
    pub fn stop_at_first_missing(mut self, value: bool) -> Self {
        self.stop_at_first_missing = value;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn stops_at_first_missing(&self) -> bool {
        self.stop_at_first_missing
    }
}
