//! Forward/reverse DNS consistency of resolved endpoints.

mod types;

pub use types::{MismatchKind, ReverseCheckOptions, ReverseMismatch};

use tracing::{debug, error, warn};

use crate::dns::{DnsLookup, normalize_name};
use crate::endpoints::Endpoint;

/// Checks that every endpoint has a PTR record naming its origin.
///
/// Each mismatch is logged at error level and returned. Literal-address
/// endpoints only need a PTR record to exist. Any other lookup failure
/// (timeout, no nameserver) is logged as a warning and the endpoint is skipped
/// without a mismatch.
pub fn check_reverse<R>(
    resolver: &R,
    endpoints: &[Endpoint],
    options: &ReverseCheckOptions,
) -> Vec<ReverseMismatch>
where
    R: DnsLookup + ?Sized,
{
    let mut mismatches = Vec::new();
    if !options.is_enabled() {
        return mismatches;
    }

    for endpoint in endpoints {
        debug!(
            address = %endpoint.address,
            origin = endpoint.origin.as_deref().unwrap_or("-"),
            "checking reverse DNS record"
        );
        let targets = match resolver.lookup_ptr(endpoint.address) {
            Ok(targets) => targets,
            Err(err) if err.is_not_found() => Vec::new(),
            Err(err) => {
                warn!(
                    address = %endpoint.address,
                    error = %err,
                    "reverse DNS lookup failed, skipping"
                );
                continue;
            }
        };

        let Some(target) = targets.first().map(|t| normalize_name(t)) else {
            let mismatch = ReverseMismatch {
                address: endpoint.address,
                origin: endpoint.origin.clone(),
                kind: MismatchKind::NoReverseRecord,
            };
            error!("{mismatch}");
            mismatches.push(mismatch);
            if options.stops_at_first_missing() {
                break;
            }
            continue;
        };
        debug!(address = %endpoint.address, target = %target, "reverse DNS record found");

        if let Some(origin) = &endpoint.origin {
            if normalize_name(origin) != target {
                let mismatch = ReverseMismatch {
                    address: endpoint.address,
                    origin: Some(origin.clone()),
                    kind: MismatchKind::ReverseMismatch { target },
                };
                error!("{mismatch}");
                mismatches.push(mismatch);
            }
        }
    }
    mismatches
}

#[cfg(test)]
mod tests;
