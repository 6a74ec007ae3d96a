//! Storefront console
//!
//! Operates on three JSON-lines files (users, products, orders) in one data
//! directory.
//!
//! Usage:
//!   storefront --data-dir ./data init
//!   storefront register --name alice_w --password secret1 --email a@b.c --mobile 0412345678
//!   storefront products --page 2

use anyhow::Result;
use clap::Parser;
use storefront_cli::{Cli, run};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    for line in run(&cli)? {
        println!("{line}");
    }
    Ok(())
}
