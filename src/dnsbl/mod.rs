//! DNSBL queries (RFC 5782) and the round-based retry scheduler.
//!
//! [`check_blacklists`] forms the cross product of endpoints and blacklists,
//! queries each pair once per round and requeues only the pairs that timed
//! out, pausing longer before every new round.

mod options;
mod query;
mod scheduler;
mod types;

pub use options::{RetryPolicy, Sleeper, ThreadSleeper};
pub use query::{query_blacklist, query_name};
pub use types::{BlacklistReport, Listing, TimedOutItem, Verdict, WorkItem};

use tracing::{debug, warn};

use crate::blacklist::BlacklistEntry;
use crate::dns::DnsLookup;
use crate::endpoints::Endpoint;

/// Every (endpoint, blacklist) pair, endpoint-major.
pub fn work_items<'a>(
    endpoints: &'a [Endpoint],
    blacklists: &'a [BlacklistEntry],
) -> Vec<WorkItem<'a>> {
    endpoints
        .iter()
        .flat_map(|endpoint| {
            blacklists
                .iter()
                .map(move |blacklist| WorkItem { endpoint, blacklist })
        })
        .collect()
}

/// Checks every endpoint against every blacklist.
///
/// Exhausted timeouts are logged as warnings and returned in
/// [`BlacklistReport::unresolved`]; they are not listings.
pub fn check_blacklists<R, S>(
    resolver: &R,
    endpoints: &[Endpoint],
    blacklists: &[BlacklistEntry],
    policy: &RetryPolicy,
    sleeper: &S,
) -> BlacklistReport
where
    R: DnsLookup + ?Sized,
    S: Sleeper + ?Sized,
{
    let items = work_items(endpoints, blacklists);
    let outcome = scheduler::run_rounds(&items, policy, sleeper, |item| {
        debug!(
            address = %item.endpoint.address,
            origin = item.endpoint.origin.as_deref().unwrap_or("-"),
            zone = %item.blacklist.zone,
            description = %item.blacklist.description,
            "checking blacklist"
        );
        let verdict = query_blacklist(resolver, item.endpoint.address, item.blacklist);
        if verdict == Verdict::TimedOut {
            debug!(
                "resolving {} in {} timed out",
                item.endpoint, item.blacklist.zone
            );
        }
        verdict
    });

    let mut report = BlacklistReport {
        attempts: outcome.attempts,
        rounds: outcome.rounds,
        ..BlacklistReport::default()
    };
    for (_, verdict) in outcome.verdicts {
        match verdict {
            Verdict::Listed(listing) => report.listings.push(listing),
            Verdict::NotListed | Verdict::Failed(_) | Verdict::TimedOut => report.not_listed += 1,
        }
    }
    for idx in outcome.timed_out {
        let item = &items[idx];
        warn!(
            "resolving {} in {} timed out after {} attempts",
            item.endpoint,
            item.blacklist.zone,
            policy.rounds()
        );
        report.unresolved.push(TimedOutItem::from(item));
    }
    report
}
