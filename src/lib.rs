#![forbid(unsafe_code)]
//! dnsbl_check: are a domain's mail servers on a DNS blacklist?
//!
//! Destinations are resolved to addresses (via MX, then A/AAAA), their
//! reverse DNS is compared with the forward names, and every address is
//! looked up in every blacklist zone following RFC 5782. Queries that time
//! out are retried in later rounds with a growing pause.

pub mod blacklist;
pub mod dns;
pub mod dnsbl;
pub mod endpoints;
pub mod rdns;
pub mod run;

pub use blacklist::{
    BlacklistEntry, BlacklistError, BlacklistSet, default_blacklists, load_blacklist_file,
};
pub use dns::{DnsError, DnsLookup, PUBLIC_RESOLVERS, ResolverSettings, build_resolver};
pub use dnsbl::{
    BlacklistReport, Listing, RetryPolicy, Sleeper, ThreadSleeper, TimedOutItem, Verdict,
    check_blacklists, query_blacklist, query_name,
};
pub use endpoints::{Endpoint, EndpointError, EndpointOptions, resolve_endpoints};
pub use rdns::{MismatchKind, ReverseCheckOptions, ReverseMismatch, check_reverse};
pub use run::{DestinationReport, RunOptions, RunSummary, check_destination, run};
