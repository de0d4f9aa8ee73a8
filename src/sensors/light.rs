//! Light-dependent resistor (LDR) ambient light sensor.
//!
//! The LDR sits in a voltage divider so that a brighter room gives a
//! higher reading.  Levels are reported on a 10-bit scale (0..=1023) to
//! match the thresholds in [`crate::config`].
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init) and
//! scales the 12-bit sample down to 10 bits.
//! On host/test: reads from a static `AtomicU16` for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

use crate::control::LightLevel;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// Highest level the sensor reports.
pub const LIGHT_LEVEL_MAX: LightLevel = 1023;

/// Simulated reading.  Starts bright so a fresh host run keeps the lamp off.
static SIM_LIGHT_LEVEL: AtomicU16 = AtomicU16::new(512);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_light_level(level: LightLevel) {
    SIM_LIGHT_LEVEL.store(level.min(LIGHT_LEVEL_MAX), Ordering::Relaxed);
}

pub struct LightSensor {
    _adc_gpio: i32,
    last: LightLevel,
}

impl LightSensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self {
            _adc_gpio: adc_gpio,
            last: 0,
        }
    }

    /// Sample the LDR.  Every call performs a fresh conversion.
    pub fn read(&mut self) -> LightLevel {
        self.last = self.read_adc();
        self.last
    }

    /// Most recent value returned by [`read`](Self::read).
    pub fn last(&self) -> LightLevel {
        self.last
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> LightLevel {
        // 12-bit ADC → 10-bit level.
        hw_init::adc1_read(crate::pins::LDR_ADC_CHANNEL) >> 2
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> LightLevel {
        SIM_LIGHT_LEVEL.load(Ordering::Relaxed)
    }
}
