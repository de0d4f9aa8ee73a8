//! Inbound console commands.
//!
//! Single ASCII characters nudge the wall clock by one unit.  Upper case
//! moves forward, lower case moves back; every other byte is ignored.

use chrono::TimeDelta;

/// Clock corrections accepted on the serial console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockCommand {
    HourForward,
    HourBack,
    MinuteForward,
    MinuteBack,
    SecondForward,
    SecondBack,
}

impl ClockCommand {
    /// Decode one console byte.  `None` for anything unrecognised.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'H' => Some(Self::HourForward),
            b'h' => Some(Self::HourBack),
            b'M' => Some(Self::MinuteForward),
            b'm' => Some(Self::MinuteBack),
            b'S' => Some(Self::SecondForward),
            b's' => Some(Self::SecondBack),
            _ => None,
        }
    }

    /// Signed offset this command applies to the clock.
    pub fn delta(self) -> TimeDelta {
        match self {
            Self::HourForward => TimeDelta::hours(1),
            Self::HourBack => TimeDelta::hours(-1),
            Self::MinuteForward => TimeDelta::minutes(1),
            Self::MinuteBack => TimeDelta::minutes(-1),
            Self::SecondForward => TimeDelta::seconds(1),
            Self::SecondBack => TimeDelta::seconds(-1),
        }
    }

    /// The console byte for this command.
    pub fn as_byte(self) -> u8 {
        match self {
            Self::HourForward => b'H',
            Self::HourBack => b'h',
            Self::MinuteForward => b'M',
            Self::MinuteBack => b'm',
            Self::SecondForward => b'S',
            Self::SecondBack => b's',
        }
    }
}
