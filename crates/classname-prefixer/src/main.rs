//! classname-prefixer: prefix the className literals of JSX and TSX sources.

mod cli;
mod config;
mod orchestrator;
mod output;

use clap::Parser;
use cli::{Args, Destination};
use miette::Result;
use output::Formatter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let outcome = orchestrator::run(&args)?;

    let report = Formatter::new(args.output).format(&outcome.reports, &outcome.summary);
    // Transformed code owns stdout when no destination is given.
    if args.destination() == Destination::Stdout {
        eprintln!("{}", report);
    } else {
        println!("{}", report);
    }

    if outcome.summary.failed_count > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Logs to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
