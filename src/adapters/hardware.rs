//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the light sensor and the lamp driver, exposing them through
//! [`LightSensorPort`] and [`LampPort`].  On non-espidf targets the
//! underlying drivers use cfg-gated simulation stubs.

use embedded_hal::digital::OutputPin;

use crate::app::ports::{LampPort, LightSensorPort};
use crate::control::LightLevel;
use crate::drivers::lamp::LampDriver;
use crate::sensors::LightSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<P: OutputPin> {
    light: LightSensor,
    lamp: LampDriver<P>,
}

impl<P: OutputPin> HardwareAdapter<P> {
    pub fn new(light: LightSensor, lamp: LampDriver<P>) -> Self {
        Self { light, lamp }
    }

    pub fn lamp(&self) -> &LampDriver<P> {
        &self.lamp
    }

    pub fn light(&self) -> &LightSensor {
        &self.light
    }
}

// ── LightSensorPort implementation ────────────────────────────

impl<P: OutputPin> LightSensorPort for HardwareAdapter<P> {
    fn read_level(&mut self) -> LightLevel {
        self.light.read()
    }
}

// ── LampPort implementation ───────────────────────────────────

impl<P: OutputPin> LampPort for HardwareAdapter<P> {
    fn activate(&mut self) {
        self.lamp.activate();
    }

    fn deactivate(&mut self) {
        self.lamp.deactivate();
    }

    fn tick(&mut self, now_ms: u32) {
        self.lamp.tick(now_ms);
    }

    fn is_on(&self) -> bool {
        self.lamp.is_on()
    }
}
