//! Pattern 3: What dynamic dispatch costs
//! Example: Zero-sized variants and two-word trait object handles
//!
//! Run with: cargo run --bin polymorphism_03_vtable
//!
//! The variants below carry no data, so they take no space at all. The vtable
//! pointer lives in the handle (`&dyn Drawable`, `Box<dyn Drawable>`), not in
//! the object: a trait object handle is a data pointer plus a vtable pointer.

use std::io::{self, Write};
use std::mem::size_of;

use crate::console::Console;

pub trait Drawable {
    fn draw(&self) -> String;
    fn rotate(&self, degrees: i32) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Circle;

impl Drawable for Circle {
    fn draw(&self) -> String {
        "Drawing circle".to_string()
    }

    fn rotate(&self, degrees: i32) -> Vec<String> {
        vec![
            format!("Rotating circle {degrees} degrees"),
            "(Note: rotation has no visual effect on circle)".to_string(),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl Drawable for Square {
    fn draw(&self) -> String {
        "Drawing square".to_string()
    }

    fn rotate(&self, degrees: i32) -> Vec<String> {
        vec![format!("Rotating square {degrees} degrees")]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Triangle;

impl Drawable for Triangle {
    fn draw(&self) -> String {
        "Drawing triangle".to_string()
    }

    fn rotate(&self, degrees: i32) -> Vec<String> {
        vec![format!("Rotating triangle {degrees} degrees")]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSizes {
    pub variant: usize,
    pub thin_ref: usize,
    pub dyn_ref: usize,
    pub boxed_dyn: usize,
}

pub fn dispatch_sizes() -> DispatchSizes {
    DispatchSizes {
        variant: size_of::<Circle>(),
        thin_ref: size_of::<&Circle>(),
        dyn_ref: size_of::<&dyn Drawable>(),
        boxed_dyn: size_of::<Box<dyn Drawable>>(),
    }
}

pub fn demo<W: Write>(console: &mut Console<W>, degrees: i32) -> io::Result<()> {
    let circle = Circle;
    let square = Square;
    let triangle = Triangle;

    console.heading("Object Information")?;
    console.line(format!("Circle size: {} bytes", size_of::<Circle>()))?;
    console.line(format!("Square size: {} bytes", size_of::<Square>()))?;
    console.line(format!("Triangle size: {} bytes", size_of::<Triangle>()))?;

    let sizes = dispatch_sizes();
    console.line(format!("&Circle size: {} bytes", sizes.thin_ref))?;
    console.line(format!(
        "&dyn Drawable size: {} bytes (data pointer + vtable pointer)",
        sizes.dyn_ref
    ))?;
    console.line(format!("Box<dyn Drawable> size: {} bytes", sizes.boxed_dyn))?;

    let shapes: [&dyn Drawable; 3] = [&circle, &square, &triangle];

    console.blank()?;
    console.line("Drawing all shapes:")?;
    for shape in shapes {
        console.line(shape.draw())?;
    }

    console.blank()?;
    console.line(format!("Rotating all shapes by {degrees} degrees:"))?;
    for shape in shapes {
        for line in shape.rotate(degrees) {
            console.line(line)?;
        }
    }
    Ok(())
}
