//! Chapter 1, Pattern 1: a calculator with a clean public interface
//!
//! Run with: cargo run --bin abstraction_01_calculator

use oop_concepts::abstraction::calculator;
use oop_concepts::{logging, Console};

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut console = Console::stdout();
    calculator::demo(&mut console)?;
    console.flush()?;
    Ok(())
}
