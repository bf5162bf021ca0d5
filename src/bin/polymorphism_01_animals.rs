//! Chapter 4, Pattern 1: a heterogeneous collection of animals
//!
//! Run with: cargo run --bin polymorphism_01_animals

use anyhow::Context;
use oop_concepts::polymorphism::animal;
use oop_concepts::{logging, Console, DemoConfig};

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = DemoConfig::embedded().context("loading embedded demo config")?;

    let mut console = Console::stdout();
    animal::demo(&mut console, &config.animals)?;
    console.flush()?;
    Ok(())
}
