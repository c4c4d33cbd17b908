#[cfg(feature = "with-serde")]
use serde::Serialize;

use crate::dnsbl::{BlacklistReport, RetryPolicy};
use crate::endpoints::{Endpoint, EndpointOptions};
use crate::rdns::{ReverseCheckOptions, ReverseMismatch};

/// Everything a run needs besides the resolver and the blacklists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub endpoints: EndpointOptions,
    pub reverse: ReverseCheckOptions,
    pub retry: RetryPolicy,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoints(mut self, options: EndpointOptions) -> Self {
        self.endpoints = options;
        self
    }

    pub fn with_reverse(mut self, options: ReverseCheckOptions) -> Self {
        self.reverse = options;
        self
    }

    pub fn with_retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }
}

/// Outcome of checking one destination.
#[cfg_attr(feature = "with-serde", derive(Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationReport {
    pub destination: String,
    pub endpoints: Vec<Endpoint>,
    pub reverse_mismatches: Vec<ReverseMismatch>,
    pub blacklists: BlacklistReport,
    /// Set when the destination could not be processed.
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
}

impl DestinationReport {
    pub(crate) fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..Self::default()
        }
    }

    /// Reverse-DNS mismatches plus blacklist listings.
    pub fn error_count(&self) -> usize {
        self.reverse_mismatches.len() + self.blacklists.listings.len()
    }

    pub fn is_clean(&self) -> bool {
        self.error.is_none() && self.error_count() == 0
    }
}

#[cfg_attr(feature = "with-serde", derive(Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub destinations: Vec<DestinationReport>,
}

impl RunSummary {
    /// The global error tally over all destinations.
    pub fn error_count(&self) -> usize {
        self.destinations.iter().map(DestinationReport::error_count).sum()
    }

    pub fn failed_destinations(&self) -> usize {
        self.destinations.iter().filter(|d| d.error.is_some()).count()
    }

    /// 0 when nothing is listed and every reverse record matched; 1 otherwise.
    /// Destinations that could not be resolved are reported but do not count.
    pub fn exit_code(&self) -> i32 {
        if self.error_count() == 0 {
            0
        } else {
            1
        }
    }
}
