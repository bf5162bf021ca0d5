//! Chapter 2, Pattern 2: public, module-scoped and private fields
//!
//! Run with: cargo run --bin encapsulation_02_access

use oop_concepts::encapsulation::access;
use oop_concepts::{logging, Console};

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut console = Console::stdout();
    access::demo(&mut console)?;
    console.flush()?;
    Ok(())
}
