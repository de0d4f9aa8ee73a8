//! Sensor drivers.
//!
//! The lamp controller has a single input sensor: the LDR on ADC1.

pub mod light;

pub use light::{LIGHT_LEVEL_MAX, LightSensor};
