//! Ambient-light condition with hysteresis.
//!
//! The threshold in use depends on whether the lamp is currently lit:
//!
//! | lamp | condition holds while  |
//! |------|------------------------|
//! | off  | `level < lower`        |
//! | on   | `level < upper`        |
//!
//! A dark room has to get distinctly dark (below `lower`) before the lamp
//! comes on, and then distinctly bright (at or above `upper`) before it
//! goes off again.  Readings are raw LDR counts, not lux.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Raw light-sensor reading (10-bit ADC scale, 0–1023).
pub type LightLevel = u16;

/// Hysteresis band.  Invariant: `lower < upper` (checked by config validation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightThresholds {
    pub lower: LightLevel,
    pub upper: LightLevel,
}

impl LightThresholds {
    pub const fn new(lower: LightLevel, upper: LightLevel) -> Self {
        Self { lower, upper }
    }

    /// Whether the light level calls for the lamp, given its current state.
    pub fn light_condition(&self, level: LightLevel, lamp_enabled: bool) -> bool {
        if lamp_enabled {
            level < self.upper
        } else {
            level < self.lower
        }
    }

    pub fn is_valid(&self) -> bool {
        self.lower < self.upper
    }
}

impl fmt::Display for LightThresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "low - {}\thigh - {}", self.lower, self.upper)
    }
}
