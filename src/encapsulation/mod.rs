//! Chapter 2: Encapsulation
//!
//! Invariants hold because the fields behind them are private and every
//! mutation goes through a method that checks first.

pub mod access;
pub mod bank_account;
