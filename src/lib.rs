//! Lamp controller firmware library.
//!
//! Exposes the pure-logic modules for integration testing and host
//! simulation.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod pins;
pub mod scheduler;

// Hardware-facing modules; each falls back to an in-memory simulation
// off-target.
pub mod adapters;
pub mod drivers;
pub mod sensors;
