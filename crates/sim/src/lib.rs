//! `gildedrose-sim` — drives an inventory through simulated days.
//!
//! The library half holds configuration and the day loop so they can be
//! tested without a process; `main.rs` only wires them to the environment.

pub mod config;
pub mod simulation;

pub use config::SimConfig;
