use std::net::IpAddr;

use super::{MismatchKind, ReverseCheckOptions, check_reverse};
use crate::dns::DnsError;
use crate::dns::tests::{Rr, StubResolver};
use crate::endpoints::Endpoint;

fn ip(raw: &str) -> IpAddr {
    raw.parse().expect("literal address")
}

#[test]
fn matching_ptr_with_or_without_root_label() {
    let stub = StubResolver::new()
        .records(Rr::Ptr, "192.0.2.1", ["MX1.Example.com."])
        .records(Rr::Ptr, "192.0.2.2", ["mx2.example.com"]);
    let endpoints = vec![
        Endpoint::resolved(ip("192.0.2.1"), "mx1.example.com"),
        Endpoint::resolved(ip("192.0.2.2"), "MX2.example.com."),
    ];

    let mismatches = check_reverse(&stub, &endpoints, &ReverseCheckOptions::new());
    assert!(mismatches.is_empty(), "{mismatches:?}");
}

#[test]
fn differing_ptr_is_counted_and_checking_continues() {
    let stub = StubResolver::new()
        .records(Rr::Ptr, "192.0.2.1", ["host.provider.net"])
        .records(Rr::Ptr, "192.0.2.2", ["other.provider.net"]);
    let endpoints = vec![
        Endpoint::resolved(ip("192.0.2.1"), "mx1.example.com"),
        Endpoint::resolved(ip("192.0.2.2"), "mx2.example.com"),
    ];

    let mismatches = check_reverse(&stub, &endpoints, &ReverseCheckOptions::new());
    assert_eq!(mismatches.len(), 2);
    assert_eq!(
        mismatches[0].kind,
        MismatchKind::ReverseMismatch {
            target: "host.provider.net".to_string()
        }
    );
    insta::assert_snapshot!(
        mismatches[0].to_string(),
        @"domain mx1.example.com resolves to 192.0.2.1, but the reverse record resolves to host.provider.net"
    );
}

#[test]
fn literal_endpoint_only_needs_a_ptr() {
    let stub = StubResolver::new().records(Rr::Ptr, "192.0.2.9", ["anything.example.net"]);
    let endpoints = vec![Endpoint::literal(ip("192.0.2.9"))];

    let mismatches = check_reverse(&stub, &endpoints, &ReverseCheckOptions::new());
    assert!(mismatches.is_empty());
}

#[test]
fn missing_ptr_stops_remaining_endpoints_by_default() {
    let stub = StubResolver::new()
        .failure(Rr::Ptr, "192.0.2.1", DnsError::no_answer("1.2.0.192.in-addr.arpa"))
        .records(Rr::Ptr, "192.0.2.2", ["unrelated.example.net"]);
    let endpoints = vec![
        Endpoint::resolved(ip("192.0.2.1"), "mx1.example.com"),
        Endpoint::resolved(ip("192.0.2.2"), "mx2.example.com"),
    ];

    let mismatches = check_reverse(&stub, &endpoints, &ReverseCheckOptions::new());
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].kind, MismatchKind::NoReverseRecord);
    assert_eq!(stub.calls(Rr::Ptr, "192.0.2.2"), 0);
    insta::assert_snapshot!(
        mismatches[0].to_string(),
        @"there is no reverse DNS record for 192.0.2.1"
    );
}

#[test]
fn missing_ptr_can_continue_with_remaining_endpoints() {
    let stub = StubResolver::new()
        .failure(Rr::Ptr, "192.0.2.1", DnsError::nxdomain("1.2.0.192.in-addr.arpa"))
        .records(Rr::Ptr, "192.0.2.2", ["unrelated.example.net"]);
    let endpoints = vec![
        Endpoint::resolved(ip("192.0.2.1"), "mx1.example.com"),
        Endpoint::resolved(ip("192.0.2.2"), "mx2.example.com"),
    ];

    let options = ReverseCheckOptions::new().stop_at_first_missing(false);
    let mismatches = check_reverse(&stub, &endpoints, &options);
    assert_eq!(mismatches.len(), 2);
    assert_eq!(mismatches[0].kind, MismatchKind::NoReverseRecord);
    assert!(matches!(
        mismatches[1].kind,
        MismatchKind::ReverseMismatch { .. }
    ));
    assert_eq!(stub.calls(Rr::Ptr, "192.0.2.2"), 1);
}

#[test]
fn disabled_check_performs_no_lookup() {
    let stub = StubResolver::new();
    let endpoints = vec![Endpoint::literal(ip("192.0.2.9"))];
    let options = ReverseCheckOptions::new().enabled(false);
    let mismatches = check_reverse(&stub, &endpoints, &options);
    assert!(mismatches.is_empty());
    assert_eq!(stub.total_calls(Rr::Ptr), 0);
}

#[test]
fn failed_ptr_lookup_skips_only_that_endpoint() {
    let stub = StubResolver::new()
        .failure(Rr::Ptr, "192.0.2.1", DnsError::timeout("1.2.0.192.in-addr.arpa"))
        .records(Rr::Ptr, "192.0.2.2", ["other.provider.net"]);
    let endpoints = vec![
        Endpoint::resolved(ip("192.0.2.1"), "mx1.example.com"),
        Endpoint::resolved(ip("192.0.2.2"), "mx2.example.com"),
    ];
    let mismatches = check_reverse(&stub, &endpoints, &ReverseCheckOptions::new());
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].address, ip("192.0.2.2"));
    assert_eq!(stub.calls(Rr::Ptr, "192.0.2.2"), 1);
}
