//! Chapter 3, Pattern 1: shared base state with overridable and final operations
//!
//! Run with: cargo run --bin inheritance_01_vehicles

use oop_concepts::inheritance::vehicle;
use oop_concepts::{logging, Console};

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut console = Console::stdout();
    vehicle::demo(&mut console)?;
    console.flush()?;
    Ok(())
}
