//! Software real-time clock.
//!
//! Wall clock = anchor date-time + monotonic time elapsed since the anchor.
//! Implements [`ClockPort`] for boards without a battery-backed RTC and for
//! host runs.  Every successful read re-anchors, so the 32-bit millisecond
//! counter wrapping is harmless as long as the clock is read at least once
//! per wrap period.
//!
//! A fresh [`SoftRtc::unset`] reports [`lost_power`](ClockPort::lost_power)
//! until the first [`set`](ClockPort::set), which is how the startup
//! sequence learns that it must fall back to the build time.

use chrono::{DateTime, NaiveDateTime, TimeDelta};
use log::debug;

use crate::app::ports::{ClockError, ClockPort, TimePort};

/// Seconds since the Unix epoch at which the firmware was built.
const BUILD_EPOCH: &str = env!("LAMPCTL_BUILD_EPOCH");

/// The firmware build time as a naive UTC date-time.
///
/// Falls back to the Unix epoch if the embedded value is unusable.
pub fn build_time() -> NaiveDateTime {
    BUILD_EPOCH
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|t| t.naive_utc())
        .unwrap_or_default()
}

pub struct SoftRtc<T: TimePort> {
    time: T,
    anchor: NaiveDateTime,
    anchor_ms: u32,
    lost_power: bool,
}

impl<T: TimePort> SoftRtc<T> {
    /// A clock already holding a valid time.
    pub fn new(time: T, now: NaiveDateTime) -> Self {
        let anchor_ms = time.millis();
        Self {
            time,
            anchor: now,
            anchor_ms,
            lost_power: false,
        }
    }

    /// A clock with no valid time, as after a cold boot.
    pub fn unset(time: T) -> Self {
        let mut rtc = Self::new(time, NaiveDateTime::default());
        rtc.lost_power = true;
        rtc
    }

    pub fn time_source(&self) -> &T {
        &self.time
    }
}

impl<T: TimePort> ClockPort for SoftRtc<T> {
    fn now(&mut self) -> Result<NaiveDateTime, ClockError> {
        let now_ms = self.time.millis();
        let elapsed = TimeDelta::milliseconds(i64::from(now_ms.wrapping_sub(self.anchor_ms)));
        let now = self
            .anchor
            .checked_add_signed(elapsed)
            .ok_or(ClockError::OutOfRange)?;
        self.anchor = now;
        self.anchor_ms = now_ms;
        Ok(now)
    }

    fn set(&mut self, time: NaiveDateTime) -> Result<(), ClockError> {
        self.anchor = time;
        self.anchor_ms = self.time.millis();
        self.lost_power = false;
        debug!("soft RTC set to {}", time);
        Ok(())
    }

    fn lost_power(&mut self) -> bool {
        self.lost_power
    }
}
