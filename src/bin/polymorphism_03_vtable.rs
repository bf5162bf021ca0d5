//! Chapter 4, Pattern 3: what dynamic dispatch costs
//!
//! Run with: cargo run --bin polymorphism_03_vtable

use anyhow::Context;
use oop_concepts::polymorphism::vtable;
use oop_concepts::{logging, Console, DemoConfig};

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = DemoConfig::embedded().context("loading embedded demo config")?;

    let mut console = Console::stdout();
    vtable::demo(&mut console, config.vtable.rotation_degrees)?;
    console.flush()?;
    Ok(())
}
