//! Pure decision rules: schedule window and light hysteresis.

pub mod hysteresis;
pub mod time_window;

pub use hysteresis::{LightLevel, LightThresholds};
pub use time_window::{ScheduleWindow, TimeOfDay};
