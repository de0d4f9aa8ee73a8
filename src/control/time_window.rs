//! Daily schedule window.
//!
//! The window is a same-day interval `[on, off)` compared on
//! `(hour, minute)` only.  Seconds never influence the boundary test.
//!
//! A window whose off time is not after its on time (an "overnight"
//! schedule such as 22:00 → 06:00) is never satisfied.  It is kept that
//! way rather than reinterpreted as wrapping past midnight.

use core::fmt;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// Wall-clock time of day, derived from the clock source on every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    /// Build a time of day, rejecting out-of-range fields.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self {
                hour,
                minute,
                second,
            })
        } else {
            None
        }
    }

    /// Extract the time of day from any chrono timestamp.
    pub fn of(t: &impl Timelike) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            second: t.second() as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Immutable `[on, off)` schedule, in hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    pub on_hour: u8,
    pub on_minute: u8,
    pub off_hour: u8,
    pub off_minute: u8,
}

impl ScheduleWindow {
    pub const fn new(on_hour: u8, on_minute: u8, off_hour: u8, off_minute: u8) -> Self {
        Self {
            on_hour,
            on_minute,
            off_hour,
            off_minute,
        }
    }

    /// Whether the lamp may be on at `now` according to the schedule.
    pub fn contains(&self, now: TimeOfDay) -> bool {
        let t = (now.hour, now.minute);
        t >= (self.on_hour, self.on_minute) && t < (self.off_hour, self.off_minute)
    }

    /// True when the off time is not after the on time, so `contains`
    /// can never return true.
    pub fn is_overnight(&self) -> bool {
        (self.off_hour, self.off_minute) <= (self.on_hour, self.on_minute)
    }

    pub fn on_time(&self) -> TimeOfDay {
        TimeOfDay {
            hour: self.on_hour,
            minute: self.on_minute,
            second: 0,
        }
    }

    pub fn off_time(&self) -> TimeOfDay {
        TimeOfDay {
            hour: self.off_hour,
            minute: self.off_minute,
            second: 0,
        }
    }
}

impl fmt::Display for ScheduleWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.on_time(), self.off_time())
    }
}
