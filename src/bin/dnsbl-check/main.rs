use anyhow::{Context, Result};
use dnsbl_check::{ThreadSleeper, build_resolver, run};
use tracing_subscriber::EnvFilter;

mod args;
mod output;

use args::Cli;

fn init_tracing(debug: bool) {
    let default = if debug {
        "warn,dnsbl_check=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let settings = cli.resolver_settings()?;
    let blacklists = cli.blacklists()?;
    let options = cli.run_options();
    let resolver = build_resolver(&settings).context("build DNS resolver")?;

    let summary = run(
        &resolver,
        &cli.dests,
        blacklists.entries(),
        &options,
        &ThreadSleeper,
    );
    output::print_summary(&summary, &cli.format)?;

    // codes de sortie : 0 propre, 1 listé ou rDNS incohérent
    std::process::exit(summary.exit_code());
}
