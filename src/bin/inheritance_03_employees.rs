//! Chapter 3, Pattern 3: an abstract worker contract
//!
//! Run with: cargo run --bin inheritance_03_employees

use anyhow::Context;
use oop_concepts::inheritance::employee;
use oop_concepts::{logging, Console, DemoConfig};

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = DemoConfig::embedded().context("loading embedded demo config")?;

    let mut console = Console::stdout();
    employee::demo(&mut console, &config.company)?;
    console.flush()?;
    Ok(())
}
