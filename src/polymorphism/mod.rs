//! Chapter 4: Polymorphism
//!
//! One piece of driver code, many concrete types: trait objects in
//! heterogeneous collections, a checkout that only knows the processor
//! contract, and a look at what `&dyn Trait` costs.

pub mod animal;
pub mod payment;
pub mod vtable;
