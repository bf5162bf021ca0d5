//! Chapter 1, Pattern 2: attributes and state-changing methods
//!
//! Run with: cargo run --bin abstraction_02_car

use oop_concepts::abstraction::car;
use oop_concepts::{logging, Console};

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut console = Console::stdout();
    car::demo(&mut console)?;
    console.flush()?;
    Ok(())
}
