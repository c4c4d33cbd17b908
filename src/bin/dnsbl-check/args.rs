use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dnsbl_check::{
    BlacklistSet, EndpointOptions, ResolverSettings, RetryPolicy, ReverseCheckOptions, RunOptions,
    load_blacklist_file,
};

#[derive(Parser)]
#[command(
    name = "dnsbl-check",
    about = "Check if mailservers are in any blacklist (DNSBL)",
    after_help = "Don't panic if a server is listed in some blacklist. \
                  See https://en.wikipedia.org/wiki/Comparison_of_DNS_blacklists \
                  for the mechanics and policies of the different lists."
)]
pub struct Cli {
    /// servers; an MX lookup is done if it is a domain
    #[arg(value_name = "DESTINATION", required = true)]
    pub dests: Vec<String>,

    /// add another blacklist (repeatable)
    #[arg(long = "bl", value_name = "ZONE")]
    pub bl: Vec<String>,

    /// read more DNSBL from a CSV file (zone,description)
    #[arg(long = "bl-file", value_name = "PATH")]
    pub bl_file: Option<PathBuf>,

    /// clear the default list of DNSBL
    #[arg(long)]
    pub clear: bool,

    /// print debug log messages
    #[arg(long)]
    pub debug: bool,

    /// use Google's public DNS nameservers
    #[arg(long)]
    pub google: bool,

    /// use Cisco's public DNS nameservers
    #[arg(long)]
    pub opendns: bool,

    /// use one or more alternate nameservers (repeatable)
    #[arg(long = "ns", value_name = "IP")]
    pub ns: Vec<IpAddr>,

    /// try to follow MX entries (default: on)
    #[arg(long, overrides_with = "no_mx")]
    pub mx: bool,

    /// ignore any MX records
    #[arg(long = "no-mx", overrides_with = "mx")]
    pub no_mx: bool,

    /// check the reverse DNS record of each address (default: on)
    #[arg(long, overrides_with = "no_rev")]
    pub rev: bool,

    /// disable reverse DNS checking
    #[arg(long = "no-rev", overrides_with = "rev")]
    pub no_rev: bool,

    /// keep checking reverse records after an address without any
    #[arg(long = "rev-check-all")]
    pub rev_check_all: bool,

    /// attempts per blacklist query if the request times out
    #[arg(long, default_value_t = 5)]
    pub retries: u32,

    /// per-query timeout (seconds)
    #[arg(long = "timeout", value_name = "SECS", default_value_t = 5)]
    pub timeout_secs: u64,

    /// parallel blacklist queries per round
    #[arg(long, default_value_t = 1)]
    pub jobs: usize,

    /// format: human|json
    #[arg(long, default_value = "human")]
    pub format: String,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn resolver_settings(&self) -> Result<ResolverSettings> {
        let mut settings = ResolverSettings::new()
            .with_nameservers(self.ns.iter().copied())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if self.google {
            settings = settings.with_public_resolvers("google")?;
        }
        if self.opendns {
            settings = settings.with_public_resolvers("opendns")?;
        }
        Ok(settings)
    }

    pub fn blacklists(&self) -> Result<BlacklistSet> {
        let mut set = if self.clear {
            BlacklistSet::empty()
        } else {
            BlacklistSet::new()
        };
        for zone in &self.bl {
            set = set.add(zone).with_context(|| format!("invalid --bl '{zone}'"))?;
        }
        if let Some(path) = &self.bl_file {
            let loaded = load_blacklist_file(path)
                .with_context(|| format!("load blacklist file {}", path.display()))?;
            set = set.extend(loaded);
        }
        Ok(set)
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions::new()
            .with_endpoints(EndpointOptions::new().follow_mx(self.mx || !self.no_mx))
            .with_reverse(
                ReverseCheckOptions::new()
                    .enabled(self.rev || !self.no_rev)
                    .stop_at_first_missing(!self.rev_check_all),
            )
            .with_retry(
                RetryPolicy::new()
                    .with_retries(self.retries)
                    .with_jobs(self.jobs),
            )
    }
}
