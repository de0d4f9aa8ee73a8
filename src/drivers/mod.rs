//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod gpio;
pub mod hw_init;
pub mod lamp;
