//! Lamp switch driver.
//!
//! A dumb actuator: [`activate`](LampDriver::activate) and
//! [`deactivate`](LampDriver::deactivate) set the *target* state, and the
//! pin follows it as soon as the relay guard allows.
//!
//! ## Relay guard
//!
//! The pin is never toggled sooner than `min_switch_ms` after the previous
//! toggle (0 disables the guard).  A change requested inside the guard is
//! held and applied by a later [`tick`](LampDriver::tick).  Requests for the
//! state the lamp is already in do nothing.
//!
//! Pin write failures are logged and retried on the next tick.

use embedded_hal::digital::OutputPin;
use log::{debug, warn};

use crate::error::ActuatorError;

pub struct LampDriver<P: OutputPin> {
    pin: P,
    min_switch_ms: u32,
    /// Requested state.
    target: bool,
    /// State last written to the pin.
    applied: bool,
    last_switch_ms: Option<u32>,
    /// Timestamp of the most recent `tick`, used for requests between ticks.
    now_ms: u32,
    write_failures: u32,
}

impl<P: OutputPin> LampDriver<P> {
    /// Wrap `pin`, assumed low (lamp off) at construction.
    pub fn new(pin: P, min_switch_ms: u32) -> Self {
        Self {
            pin,
            min_switch_ms,
            target: false,
            applied: false,
            last_switch_ms: None,
            now_ms: 0,
            write_failures: 0,
        }
    }

    pub fn activate(&mut self) {
        self.request(true);
    }

    pub fn deactivate(&mut self) {
        self.request(false);
    }

    /// Periodic housekeeping: apply a held change once the guard expires.
    pub fn tick(&mut self, now_ms: u32) {
        self.now_ms = now_ms;
        if self.target != self.applied {
            self.try_apply();
        }
    }

    /// Physical state of the lamp (what the pin was last driven to).
    pub fn is_on(&self) -> bool {
        self.applied
    }

    /// A change is waiting for the guard or a successful write.
    pub fn is_pending(&self) -> bool {
        self.target != self.applied
    }

    pub fn write_failures(&self) -> u32 {
        self.write_failures
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    // ── Internal ──────────────────────────────────────────────

    fn request(&mut self, on: bool) {
        self.target = on;
        if self.target != self.applied {
            self.try_apply();
        }
    }

    fn guard_open(&self) -> bool {
        match self.last_switch_ms {
            Some(at) => self.now_ms.wrapping_sub(at) >= self.min_switch_ms,
            None => true,
        }
    }

    fn try_apply(&mut self) {
        if !self.guard_open() {
            debug!("lamp: change held by relay guard");
            return;
        }
        match self.write(self.target) {
            Ok(()) => {
                self.applied = self.target;
                self.last_switch_ms = Some(self.now_ms);
            }
            Err(e) => {
                self.write_failures = self.write_failures.wrapping_add(1);
                warn!("lamp: {} (will retry)", e);
            }
        }
    }

    fn write(&mut self, on: bool) -> Result<(), ActuatorError> {
        let res = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|_| ActuatorError::GpioWriteFailed)
    }
}
