//! `gqlgo`: generates Go types from a GraphQL introspection response.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    cli::run(&args)
}
