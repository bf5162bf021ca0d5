//! Chapter 3: Inheritance, the Rust way
//!
//! No base classes: shared state is a struct the variants hold, shared
//! behavior is a trait with default methods, and "final" behavior is a
//! blanket-implemented extension trait or an inherent method on `dyn Trait`.

pub mod dispatch;
pub mod employee;
pub mod vehicle;
