//! `archscan` command line entry point

use clap::Parser;

use archscan::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
