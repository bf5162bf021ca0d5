//! Chapter 2, Pattern 1: a bank account with validated mutation
//!
//! Run with: cargo run --bin encapsulation_01_bank_account

use anyhow::Context;
use oop_concepts::encapsulation::bank_account;
use oop_concepts::{logging, Console, DemoConfig};

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = DemoConfig::embedded().context("loading embedded demo config")?;

    let mut console = Console::stdout();
    bank_account::demo(&mut console, &config.bank)?;
    console.flush()?;
    Ok(())
}
