//! Address resolution: turns a destination token into the endpoints to check.
//!
//! Literal IPv4/IPv6 tokens are used as-is. Domain names are resolved through
//! their MX exchanges (when enabled) and then A/AAAA records.

mod error;
mod types;

pub use error::EndpointError;
pub use types::{Endpoint, EndpointOptions};

use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::dns::{DnsError, DnsLookup};

static IPV4_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[.0-9]+$").expect("valid regex"));
static IPV6_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[:0-9a-fA-F]+$").expect("valid regex"));

/// True when `token` has the lexical shape of an IP address literal.
pub fn looks_like_address(token: &str) -> bool {
    IPV4_SHAPE.is_match(token) || IPV6_SHAPE.is_match(token)
}

/// Resolves `destination` into a non-empty list of endpoints.
pub fn resolve_endpoints<R>(
    resolver: &R,
    destination: &str,
    options: &EndpointOptions,
) -> Result<Vec<Endpoint>, EndpointError>
where
    R: DnsLookup + ?Sized,
{
    let token = destination.trim();
    if token.is_empty() {
        return Err(EndpointError::EmptyDestination);
    }

    if looks_like_address(token) {
        let address = token
            .parse::<IpAddr>()
            .map_err(|_| EndpointError::InvalidAddress {
                token: token.to_string(),
            })?;
        return Ok(vec![Endpoint::literal(address)]);
    }

    let domain = normalize_destination(token)?;
    let candidates = if options.follows_mx() {
        mail_exchangers(resolver, &domain)?
    } else {
        vec![domain.clone()]
    };

    let mut endpoints = Vec::new();
    for candidate in &candidates {
        let found = addresses_of(resolver, candidate)
            .map_err(|err| EndpointError::lookup(destination, err))?;
        if !found.is_empty() {
            debug!(
                domain = %candidate,
                addresses = %join_addresses(&found),
                "domain has addresses"
            );
        }
        endpoints.extend(found.into_iter().map(|addr| Endpoint::resolved(addr, candidate)));
    }

    if endpoints.is_empty() {
        return Err(EndpointError::NoAddressRecords {
            destination: domain,
        });
    }
    Ok(endpoints)
}

fn normalize_destination(token: &str) -> Result<String, EndpointError> {
    let trimmed = token.trim_end_matches('.');
    idna::domain_to_ascii(trimmed).map_err(|_| EndpointError::IdnaConversion {
        destination: token.to_string(),
    })
}

fn mail_exchangers<R>(resolver: &R, domain: &str) -> Result<Vec<String>, EndpointError>
where
    R: DnsLookup + ?Sized,
{
    match resolver.lookup_mx(domain) {
        Ok(exchanges) if !exchanges.is_empty() => {
            debug!(
                destination = %domain,
                exchanges = %exchanges.join(", "),
                "destination has MX records"
            );
            Ok(exchanges)
        }
        Ok(_) => Ok(vec![domain.to_string()]),
        Err(err) if err.is_no_answer() => {
            debug!(destination = %domain, "no MX records, checking the domain itself");
            Ok(vec![domain.to_string()])
        }
        Err(err) => Err(EndpointError::lookup(domain, err)),
    }
}

/// A then AAAA; "no such record" for either type contributes nothing.
fn addresses_of<R>(resolver: &R, domain: &str) -> Result<Vec<IpAddr>, DnsError>
where
    R: DnsLookup + ?Sized,
{
    let mut out = Vec::new();
    match resolver.lookup_ipv4(domain) {
        Ok(v4) => out.extend(v4.into_iter().map(IpAddr::V4)),
        Err(err) if err.is_no_answer() => {}
        Err(err) => return Err(err),
    }
    match resolver.lookup_ipv6(domain) {
        Ok(v6) => out.extend(v6.into_iter().map(IpAddr::V6)),
        Err(err) if err.is_no_answer() => {}
        Err(err) => return Err(err),
    }
    Ok(out)
}

fn join_addresses(addresses: &[IpAddr]) -> String {
    addresses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
