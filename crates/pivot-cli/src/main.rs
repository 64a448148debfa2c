use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use pivot_core::document::write::{corrected_path, persist_document};

mod args;

fn main() -> Result<()> {
    let args = args::Args::parse();
    init_logging(args.verbose);

    info!(
        "{} v{} correcting {}",
        pivot_core::TOOL_NAME,
        env!("CARGO_PKG_VERSION"),
        args.input.display()
    );

    let (doc, summary) = pivot_core::correct(&args.input)?;
    debug!(
        pruned = summary.pruned,
        annotated = summary.annotated,
        "document normalized"
    );

    let out = args.out.unwrap_or_else(|| corrected_path(&args.input));

    // A failed write is reported but does not fail the run.
    match persist_document(&out, &doc) {
        Ok(()) => info!("wrote {}", out.display()),
        Err(err) => error!("{err:#}"),
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
