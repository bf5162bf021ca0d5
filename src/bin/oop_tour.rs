//! Runs every chapter's demo in order.
//!
//! Run with: cargo run --bin oop_tour

use anyhow::Context;
use oop_concepts::{logging, tour, Console, DemoConfig};

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = DemoConfig::embedded().context("loading embedded demo config")?;

    let mut console = Console::stdout();
    tour::run_all(&mut console, &config)?;
    console.flush()?;
    Ok(())
}
