//! Chapter 1: Abstraction
//!
//! Show callers only what they need: a handful of public methods, with the
//! state and helpers behind them kept private to the module.

pub mod calculator;
pub mod car;
pub mod shape;
