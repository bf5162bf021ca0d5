//! Chapter 3, Pattern 2: overriding vs shadowing
//!
//! Run with: cargo run --bin inheritance_02_dispatch

use oop_concepts::inheritance::dispatch;
use oop_concepts::{logging, Console};

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut console = Console::stdout();
    dispatch::demo(&mut console)?;
    console.flush()?;
    Ok(())
}
