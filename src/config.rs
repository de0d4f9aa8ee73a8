//! System configuration parameters
//!
//! All tunable parameters for the lamp controller.  The defaults are the
//! compile-time constants below; the host build may read a JSON file once
//! at startup, but nothing is reloaded at runtime.

use serde::{Deserialize, Serialize};

use crate::control::{LightThresholds, ScheduleWindow};
use crate::error::ConfigError;

// --- Schedule ---
pub const ON_HOUR: u8 = 5;
pub const ON_MINUTE: u8 = 30;
pub const OFF_HOUR: u8 = 22;
pub const OFF_MINUTE: u8 = 30;

// --- LDR thresholds (raw 10-bit counts) ---
pub const LDR_LOWER_THRESHOLD: u16 = 10;
pub const LDR_UPPER_THRESHOLD: u16 = 30;

// --- Timing ---
pub const POLL_INTERVAL_MS: u32 = 1000;

// --- Console ---
pub const SERIAL_BAUD: u32 = 57_600;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LampConfig {
    /// Daily `[on, off)` window in which the lamp may be lit
    pub window: ScheduleWindow,
    /// Hysteresis band for the ambient-light condition
    pub thresholds: LightThresholds,
    /// Interval between lamp decisions (milliseconds)
    pub poll_interval_ms: u32,
    /// Minimum time between two relay toggles (milliseconds, 0 = none)
    pub lamp_min_switch_ms: u32,
    /// Console UART baud rate
    pub serial_baud: u32,
    /// Default log filter (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: heapless::String<8>,
}

impl Default for LampConfig {
    fn default() -> Self {
        let mut log_level = heapless::String::new();
        // "debug" always fits the 8-byte buffer.
        let _ = log_level.push_str("debug");

        Self {
            window: ScheduleWindow::new(ON_HOUR, ON_MINUTE, OFF_HOUR, OFF_MINUTE),
            thresholds: LightThresholds::new(LDR_LOWER_THRESHOLD, LDR_UPPER_THRESHOLD),
            poll_interval_ms: POLL_INTERVAL_MS,
            lamp_min_switch_ms: 0,
            serial_baud: SERIAL_BAUD,
            log_level,
        }
    }
}

impl LampConfig {
    /// Range-check every field.  Invalid values are rejected, never clamped.
    ///
    /// An overnight window passes validation: it is well-formed, it just
    /// never lets the lamp on.  Callers are expected to warn about it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        if w.on_hour > 23 || w.off_hour > 23 {
            return Err(ConfigError::ValidationFailed("window hour must be 0-23"));
        }
        if w.on_minute > 59 || w.off_minute > 59 {
            return Err(ConfigError::ValidationFailed("window minute must be 0-59"));
        }
        if !self.thresholds.is_valid() {
            return Err(ConfigError::ValidationFailed(
                "lower threshold must be below upper threshold",
            ));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("poll interval must be non-zero"));
        }
        if self.serial_baud == 0 {
            return Err(ConfigError::ValidationFailed("serial baud must be non-zero"));
        }
        if self.log_filter().is_none() {
            return Err(ConfigError::ValidationFailed("unknown log level"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.  Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// `log_level` as a filter, `None` when it names no level.
    pub fn log_filter(&self) -> Option<log::LevelFilter> {
        self.log_level.parse().ok()
    }
}
