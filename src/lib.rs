//! # Object-Oriented Concepts in Rust
//!
//! Runnable teaching programs for the four classic OOP pillars, expressed with
//! the tools Rust actually has: traits, structs, module visibility and trait objects.
//!
//! ## Chapter 1: Abstraction
//! - A calculator that hides its state behind a small public interface
//! - A car with private attributes and state-changing methods
//! - An abstract `Shape` contract with a default method
//!
//! ## Chapter 2: Encapsulation
//! - A bank account with validated mutation and a read-only history
//! - Public, module-scoped ("protected") and private fields
//!
//! ## Chapter 3: Inheritance (without inheritance)
//! - Shared base state through composition, overridable and final operations
//! - Overriding vs shadowing, multi-level override by delegation
//! - An abstract worker contract over a heterogeneous staff list
//!
//! ## Chapter 4: Polymorphism
//! - Heterogeneous `Vec<Box<dyn Animal>>`
//! - A checkout driver and processor registry over `dyn PaymentProcessor`
//! - What a vtable costs: fat pointers and zero-sized variants
//!
//! Every program lives in `src/bin/` and only wires up logging, the embedded
//! demo configuration and stdout:
//!
//! ```bash
//! cargo run --bin encapsulation_01_bank_account
//! cargo run --bin polymorphism_02_payments
//! cargo run --bin oop_tour
//! ```

pub mod abstraction;
pub mod config;
pub mod console;
pub mod encapsulation;
pub mod error;
pub mod inheritance;
pub mod logging;
pub mod money;
pub mod polymorphism;
pub mod tour;

pub use config::DemoConfig;
pub use console::Console;
pub use error::{AccountError, CalculatorError, ConfigError, MoneyError, PaymentError};
pub use money::Money;
