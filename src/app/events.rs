//! Outbound application events.
//!
//! The core emits these through the [`EventSink`](super::ports::EventSink)
//! port.  They are purely observational: nothing in the control path
//! depends on whether or how they are recorded.

use chrono::NaiveDateTime;

use crate::control::{LightLevel, LightThresholds, ScheduleWindow, TimeOfDay};
use crate::error::ClockError;

use super::commands::ClockCommand;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Startup report: clock reading and active configuration.
    Started {
        time: Option<NaiveDateTime>,
        window: ScheduleWindow,
        thresholds: LightThresholds,
    },

    /// The RTC had lost power and was reset to the fallback time.
    ClockFallback { time: NaiveDateTime },

    /// Result of the schedule-window check.  `time` is `None` when the
    /// clock could not be read (the check then counts as outside).
    TimeChecked {
        time: Option<TimeOfDay>,
        in_window: bool,
    },

    /// Result of the ambient-light check.
    LightChecked { level: LightLevel, dark_enough: bool },

    /// The lamp was switched on.
    LampActivated,

    /// The lamp was switched off.
    LampDeactivated,

    /// Committed lamp state after a decision.
    LampState(bool),

    /// A console command moved the clock.
    ClockAdjusted {
        command: ClockCommand,
        time: NaiveDateTime,
    },

    /// The clock could not be read or written.
    ClockFault(ClockError),
}
