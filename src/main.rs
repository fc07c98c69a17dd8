use anyhow::{Context, Result};
use tracing::info;

use mailfish_uci::UciEngine;

fn main() -> Result<()> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("mailfish starting");
    UciEngine::new().run().context("UCI session failed")?;
    Ok(())
}
