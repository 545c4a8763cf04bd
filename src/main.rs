mod cli;
mod workflow;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli_args = cli::Cli::parse();
    init_tracing(cli_args.verbose);

    // Delegate the main application logic to the workflow module
    workflow::run_fpick(cli_args)
}
