use super::{RunOptions, RunSummary, check_destination, run};
use crate::blacklist::BlacklistEntry;
use crate::dns::DnsError;
use crate::dns::tests::{RecordingSleeper, Rr, StubResolver};
use crate::dnsbl::RetryPolicy;
use crate::rdns::ReverseCheckOptions;

fn lists() -> Vec<BlacklistEntry> {
    vec![
        BlacklistEntry::new("bl.example.net", "first").expect("zone"),
        BlacklistEntry::new("dnsbl.example.org", "second").expect("zone"),
    ]
}

#[test]
fn clean_literal_address_succeeds() {
    let stub = StubResolver::new().records(Rr::Ptr, "192.0.2.25", ["mail.example.com"]);
    let summary = run(
        &stub,
        &["192.0.2.25"],
        &lists(),
        &RunOptions::new(),
        &RecordingSleeper::default(),
    );
    assert_eq!(summary.error_count(), 0);
    assert_eq!(summary.exit_code(), 0);
    assert!(summary.destinations[0].is_clean());
    assert_eq!(summary.destinations[0].blacklists.not_listed, 2);
}

#[test]
fn listed_address_counts_once_per_blacklist() {
    let stub = StubResolver::new()
        .failure(Rr::Mx, "example.com", DnsError::no_answer("example.com"))
        .records(Rr::A, "example.com", ["192.0.2.2"])
        .failure(Rr::Aaaa, "example.com", DnsError::no_answer("example.com"))
        .records(Rr::Ptr, "192.0.2.2", ["example.com."])
        .records(Rr::A, "2.2.0.192.bl.example.net", ["127.0.0.2"])
        .records(Rr::Txt, "2.2.0.192.bl.example.net", ["spam source"]);

    let summary = run(
        &stub,
        &["example.com"],
        &lists(),
        &RunOptions::new(),
        &RecordingSleeper::default(),
    );
    let report = &summary.destinations[0];
    assert_eq!(report.error_count(), 1);
    assert!(report.reverse_mismatches.is_empty());
    let listing = &report.blacklists.listings[0];
    assert_eq!(listing.zone, "bl.example.net");
    assert_eq!(listing.reason, "spam source");
    assert_eq!(
        listing.to_string(),
        "192.0.2.2 is listed in bl.example.net: 127.0.0.2 (spam source)"
    );
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn reverse_mismatch_fails_the_run_without_listings() {
    let stub = StubResolver::new()
        .records(Rr::Mx, "example.com", ["mx.example.com"])
        .records(Rr::A, "mx.example.com", ["192.0.2.3"])
        .failure(Rr::Aaaa, "mx.example.com", DnsError::no_answer("mx.example.com"))
        .records(Rr::Ptr, "192.0.2.3", ["dynamic-3.isp.example"]);

    let summary = run(
        &stub,
        &["example.com"],
        &lists(),
        &RunOptions::new(),
        &RecordingSleeper::default(),
    );
    assert_eq!(summary.error_count(), 1);
    assert!(summary.destinations[0].blacklists.listings.is_empty());
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn disabled_reverse_check_ignores_ptr() {
    let stub = StubResolver::new();
    let options = RunOptions::new().with_reverse(ReverseCheckOptions::new().enabled(false));
    let report = check_destination(
        &stub,
        "192.0.2.25",
        &lists(),
        &options,
        &RecordingSleeper::default(),
    );
    assert!(report.is_clean());
    assert_eq!(stub.total_calls(Rr::Ptr), 0);
}

#[test]
fn unresolvable_destination_does_not_stop_the_run() {
    let stub = StubResolver::new()
        .failure(Rr::Mx, "empty.example", DnsError::no_answer("empty.example"))
        .failure(Rr::A, "empty.example", DnsError::no_answer("empty.example"))
        .failure(Rr::Aaaa, "empty.example", DnsError::no_answer("empty.example"))
        .records(Rr::Ptr, "192.0.2.25", ["mail.example.com"]);

    let summary = run(
        &stub,
        &["empty.example", "192.0.2.25"],
        &lists(),
        &RunOptions::new(),
        &RecordingSleeper::default(),
    );
    assert_eq!(summary.destinations.len(), 2);
    assert!(summary.destinations[0].error.is_some());
    assert!(summary.destinations[1].is_clean());
    assert_eq!(summary.error_count(), 0);
    assert_eq!(summary.failed_destinations(), 1);
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn ptr_timeout_still_checks_blacklists() {
    let listed = "25.2.0.192.bl.example.net";
    let stub = StubResolver::new()
        .failure(Rr::Ptr, "192.0.2.25", DnsError::timeout("25.2.0.192.in-addr.arpa"))
        .records(Rr::A, listed, ["127.0.0.2"]);

    let summary = run(
        &stub,
        &["192.0.2.25"],
        &lists(),
        &RunOptions::new(),
        &RecordingSleeper::default(),
    );
    let report = &summary.destinations[0];
    assert!(report.error.is_none());
    assert!(report.reverse_mismatches.is_empty());
    assert_eq!(report.blacklists.listings.len(), 1);
    assert_eq!(report.blacklists.listings[0].zone, "bl.example.net");
    assert_eq!(stub.calls(Rr::A, listed), 1);
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn exhausted_timeouts_do_not_fail_the_run() {
    let slow = "25.2.0.192.bl.example.net";
    let stub = StubResolver::new()
        .records(Rr::Ptr, "192.0.2.25", ["mail.example.com"])
        .failure(Rr::A, slow, DnsError::timeout(slow));
    let sleeper = RecordingSleeper::default();
    let options = RunOptions::new().with_retry(RetryPolicy::new().with_retries(3));

    let summary = run(&stub, &["192.0.2.25"], &lists(), &options, &sleeper);
    assert_eq!(summary.exit_code(), 0);
    assert_eq!(summary.destinations[0].blacklists.unresolved.len(), 1);
    assert_eq!(stub.calls(Rr::A, slow), 3);
    assert_eq!(sleeper.delays.borrow().len(), 2);
}

#[test]
fn empty_summary_is_success() {
    assert_eq!(RunSummary::default().exit_code(), 0);
}
