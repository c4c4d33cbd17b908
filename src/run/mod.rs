//! Run coordination: resolve, verify reverse DNS, then check blacklists, one
//! destination after the other.

mod types;

pub use types::{DestinationReport, RunOptions, RunSummary};

use tracing::{debug, error};

use crate::blacklist::BlacklistEntry;
use crate::dns::DnsLookup;
use crate::dnsbl::{Sleeper, check_blacklists};
use crate::endpoints::resolve_endpoints;
use crate::rdns::check_reverse;

/// Checks every destination in input order.
///
/// A destination that cannot be resolved is recorded with its error and the
/// run moves on to the next one.
pub fn run<R, S, D>(
    resolver: &R,
    destinations: &[D],
    blacklists: &[BlacklistEntry],
    options: &RunOptions,
    sleeper: &S,
) -> RunSummary
where
    R: DnsLookup + ?Sized,
    S: Sleeper + ?Sized,
    D: AsRef<str>,
{
    debug!(count = blacklists.len(), "checking DNS blacklists");
    let destinations = destinations
        .iter()
        .map(|destination| {
            check_destination(resolver, destination.as_ref(), blacklists, options, sleeper)
        })
        .collect();
    RunSummary { destinations }
}

pub fn check_destination<R, S>(
    resolver: &R,
    destination: &str,
    blacklists: &[BlacklistEntry],
    options: &RunOptions,
    sleeper: &S,
) -> DestinationReport
where
    R: DnsLookup + ?Sized,
    S: Sleeper + ?Sized,
{
    let mut report = DestinationReport::new(destination);

    report.endpoints = match resolve_endpoints(resolver, destination, &options.endpoints) {
        Ok(endpoints) => endpoints,
        Err(err) => {
            error!("{err}");
            report.error = Some(err.to_string());
            return report;
        }
    };

    report.reverse_mismatches = check_reverse(resolver, &report.endpoints, &options.reverse);

    report.blacklists = check_blacklists(
        resolver,
        &report.endpoints,
        blacklists,
        &options.retry,
        sleeper,
    );
    let listed = report.blacklists.listings.len();
    if listed > 0 {
        error!("{destination} is listed in {listed} blacklists");
    }
    report
}

#[cfg(test)]
mod tests;
