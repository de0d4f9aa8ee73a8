//! Application core: pure domain logic, zero I/O.
//!
//! The lamp decision rules, the periodic task that drives them and the
//! clock-adjustment console.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod commands;
pub mod console;
pub mod controller;
pub mod events;
pub mod ports;
pub mod service;
