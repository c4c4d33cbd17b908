use anyhow::{Result, bail};
use dnsbl_check::{DestinationReport, RunSummary};

pub fn print_summary(summary: &RunSummary, format: &str) -> Result<()> {
    match format {
        "human" => {
            for report in &summary.destinations {
                print_human(report);
            }
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                println!("{}", serde_json::to_string_pretty(summary)?);
            }
            #[cfg(not(feature = "with-serde"))]
            {
                bail!("format=json requires the 'with-serde' feature");
            }
        }
        other => bail!("unknown --format '{other}', use: human|json"),
    }
    Ok(())
}

fn print_human(report: &DestinationReport) {
    if let Some(error) = &report.error {
        println!("[ERROR]  {} :: {}", report.destination, error);
        return;
    }

    let checked = report.blacklists.attempts;
    if report.is_clean() {
        println!(
            "[OK]     {} ({} addresses, {} queries)",
            report.destination,
            report.endpoints.len(),
            checked
        );
    } else {
        println!(
            "[LISTED] {} :: {} listings, {} reverse DNS mismatches",
            report.destination,
            report.blacklists.listings.len(),
            report.reverse_mismatches.len()
        );
    }
    for mismatch in &report.reverse_mismatches {
        println!("         rdns: {mismatch}");
    }
    for listing in &report.blacklists.listings {
        println!("         dnsbl: {listing}");
    }
    for item in &report.blacklists.unresolved {
        println!(
            "         timeout: {} in {} could not be checked",
            item.address, item.zone
        );
    }
}
