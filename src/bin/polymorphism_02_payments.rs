//! Chapter 4, Pattern 2: checkout over a payment processor contract
//!
//! Run with: cargo run --bin polymorphism_02_payments

use anyhow::Context;
use oop_concepts::polymorphism::payment;
use oop_concepts::{logging, Console, DemoConfig};

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = DemoConfig::embedded().context("loading embedded demo config")?;

    let mut console = Console::stdout();
    payment::demo(&mut console, &config.checkout)?;
    console.flush()?;
    Ok(())
}
