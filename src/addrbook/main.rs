use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::setup::Cli;

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    if let Err(e) = cli::commands::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never mix with REPL output. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
