use std::net::IpAddr;

use tracing::{debug, error};

use super::{Listing, Verdict};
use crate::blacklist::BlacklistEntry;
use crate::dns::{DnsError, DnsLookup, reverse_name};

/// RFC 5782 query name: the reverse-DNS labels of `address` without the
/// `in-addr.arpa`/`ip6.arpa` suffix, followed by `zone`.
///
/// `127.0.0.2` in `zen.spamhaus.org` gives `2.0.0.127.zen.spamhaus.org`.
pub fn query_name(address: IpAddr, zone: &str) -> String {
    let reversed = reverse_name(address);
    let labels: Vec<&str> = reversed.split('.').collect();
    let kept = &labels[..labels.len().saturating_sub(2)];
    format!("{}.{}", kept.join("."), zone.trim().trim_end_matches('.'))
}

/// Looks `address` up in one blacklist.
///
/// Only a timeout is reported as such; every other failure means "not
/// listed". A missing TXT record leaves the reason empty.
pub fn query_blacklist<R>(resolver: &R, address: IpAddr, blacklist: &BlacklistEntry) -> Verdict
where
    R: DnsLookup + ?Sized,
{
    let name = query_name(address, &blacklist.zone);
    let listed_as = match resolver.lookup_ipv4(&name) {
        Ok(answers) => match answers.first() {
            Some(first) => *first,
            None => return Verdict::NotListed,
        },
        Err(DnsError::NotFound { .. }) | Err(DnsError::NoNameservers { .. }) => {
            return Verdict::NotListed;
        }
        Err(DnsError::Timeout { .. }) => return Verdict::TimedOut,
        Err(err) => {
            debug!(query = %name, error = %err, "blacklist lookup failed, counted as not listed");
            return Verdict::Failed(err.to_string());
        }
    };

    let reason = match resolver.lookup_txt(&name) {
        Ok(records) => records.into_iter().next().unwrap_or_default(),
        Err(err) => {
            debug!(query = %name, error = %err, "no TXT reason for listing");
            String::new()
        }
    };

    let listing = Listing {
        address,
        zone: blacklist.zone.clone(),
        description: blacklist.description.clone(),
        listed_as,
        reason,
    };
    error!("{listing}");
    Verdict::Listed(listing)
}
