//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (RTC, light sensor, lamp, console, event sinks) implement
//! these traits.  The [`AppService`](super::service::AppService) consumes
//! them via generics, so the domain core never touches hardware directly
//! and every collaborator can be replaced by a fake in tests.

use chrono::{NaiveDateTime, TimeDelta};

use crate::control::LightLevel;

pub use crate::error::ClockError;

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: RTC ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Wall-clock source with manual correction.
pub trait ClockPort {
    /// Current local date and time.
    fn now(&mut self) -> Result<NaiveDateTime, ClockError>;

    /// Overwrite the stored date and time.
    fn set(&mut self, time: NaiveDateTime) -> Result<(), ClockError>;

    /// Whether the backing store lost its time (e.g. RTC battery died).
    /// Cleared by the next successful [`set`](Self::set).
    fn lost_power(&mut self) -> bool;

    /// Shift the stored time by `delta`.  Returns the new time.
    ///
    /// Date boundaries carry: 00:30 minus one hour is 23:30 the day before.
    fn adjust(&mut self, delta: TimeDelta) -> Result<NaiveDateTime, ClockError> {
        let now = self.now()?;
        let shifted = now
            .checked_add_signed(delta)
            .ok_or(ClockError::OutOfRange)?;
        self.set(shifted)?;
        Ok(shifted)
    }
}

// ───────────────────────────────────────────────────────────────
// Monotonic time port
// ───────────────────────────────────────────────────────────────

/// Free-running millisecond counter.  Wraps at `u32::MAX`; consumers
/// compare timestamps with `wrapping_sub`.
pub trait TimePort {
    fn millis(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Light sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the ambient-light sensor.
pub trait LightSensorPort {
    /// One raw reading in the device-native range (0–1023).
    /// Trusted as-is: no range check, no retry.
    fn read_level(&mut self) -> LightLevel;
}

// ───────────────────────────────────────────────────────────────
// Lamp port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the lamp switch.
pub trait LampPort {
    /// Request the lamp on.
    fn activate(&mut self);

    /// Request the lamp off.
    fn deactivate(&mut self);

    /// Per-loop housekeeping (relay guard, pending writes).  Called every
    /// main-loop iteration regardless of state; must be idempotent.
    fn tick(&mut self, now_ms: u32);

    /// Whether the lamp output is currently energised.
    fn is_on(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Command input port (driven adapter: serial → domain)
// ───────────────────────────────────────────────────────────────

/// Non-blocking byte source for console commands.
pub trait CommandInput {
    /// Next pending byte, or `None` immediately when nothing is waiting.
    fn read_byte(&mut self) -> Option<u8>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
