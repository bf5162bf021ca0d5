//! Pattern 1: Basic abstraction
//! Example: A calculator with a clean public interface
//!
//! Run with: cargo run --bin abstraction_01_calculator
//!
//! The stored result and the helper that writes it are private. Outside this
//! module neither can be named:
//!
//! ```compile_fail
//! use oop_concepts::abstraction::calculator::Calculator;
//!
//! let calc = Calculator::new();
//! let _ = calc.last_result; // private field
//! ```
//!
//! ```compile_fail
//! use oop_concepts::abstraction::calculator::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.store_result(100.0); // private method
//! ```

use std::fmt::Display;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::console::Console;
use crate::error::CalculatorError;

#[derive(Debug, Default)]
pub struct Calculator {
    last_result: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        let sum = a
            .checked_add(b)
            .ok_or(CalculatorError::Overflow { operation: "addition", lhs: a, rhs: b })?;
        self.store_result(f64::from(sum));
        Ok(sum)
    }

    pub fn subtract(&mut self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        let difference = a.checked_sub(b).ok_or(CalculatorError::Overflow {
            operation: "subtraction",
            lhs: a,
            rhs: b,
        })?;
        self.store_result(f64::from(difference));
        Ok(difference)
    }

    pub fn multiply(&mut self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        let product = a.checked_mul(b).ok_or(CalculatorError::Overflow {
            operation: "multiplication",
            lhs: a,
            rhs: b,
        })?;
        self.store_result(f64::from(product));
        Ok(product)
    }

    pub fn divide(&mut self, a: i32, b: i32) -> Result<f64, CalculatorError> {
        if b == 0 {
            warn!(dividend = a, "division by zero rejected");
            return Err(CalculatorError::DivisionByZero);
        }
        let quotient = f64::from(a) / f64::from(b);
        self.store_result(quotient);
        Ok(quotient)
    }

    /// Result of the most recent successful operation, `0` before any.
    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    fn store_result(&mut self, result: f64) {
        debug!(result, "calculator result stored");
        self.last_result = result;
    }
}

fn show<T: Display>(
    console: &mut Console<impl Write>,
    label: &str,
    result: Result<T, CalculatorError>,
) -> io::Result<()> {
    match result {
        Ok(value) => console.line(format!("{label} = {value}")),
        Err(err) => console.error(err),
    }
}

pub fn demo<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    let mut calc = Calculator::new();

    show(console, "Add 10 + 5", calc.add(10, 5))?;
    show(console, "Subtract 10 - 3", calc.subtract(10, 3))?;
    show(console, "Multiply 4 * 7", calc.multiply(4, 7))?;
    show(console, "Divide 20 / 4", calc.divide(20, 4))?;
    show(console, "Divide 7 / 0", calc.divide(7, 0))?;

    console.line(format!("Last result: {}", calc.last_result()))
}
