//! Chapter 1, Pattern 3: shapes behind an abstract contract
//!
//! Run with: cargo run --bin abstraction_03_shapes

use anyhow::Context;
use oop_concepts::abstraction::shape;
use oop_concepts::{logging, Console, DemoConfig};

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = DemoConfig::embedded().context("loading embedded demo config")?;

    let mut console = Console::stdout();
    shape::demo(&mut console, &config.shapes)?;
    console.flush()?;
    Ok(())
}
