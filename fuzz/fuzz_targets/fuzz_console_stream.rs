//! Fuzz target: clock-adjustment console
//!
//! Feeds arbitrary byte streams through `ClockConsole` one poll at a time
//! and verifies:
//! - No panics, including near the ends of the chrono date range
//! - Every applied command moves the clock by exactly its delta
//! - Unknown bytes never touch the clock
//!
//! cargo fuzz run fuzz_console_stream

#![no_main]

use chrono::{NaiveDateTime, TimeDelta};
use libfuzzer_sys::fuzz_target;
use lampctl::app::commands::ClockCommand;
use lampctl::app::console::ClockConsole;
use lampctl::app::events::AppEvent;
use lampctl::app::ports::{ClockError, ClockPort, CommandInput, EventSink};

struct MemClock(NaiveDateTime);

impl ClockPort for MemClock {
    fn now(&mut self) -> Result<NaiveDateTime, ClockError> {
        Ok(self.0)
    }
    fn set(&mut self, time: NaiveDateTime) -> Result<(), ClockError> {
        self.0 = time;
        Ok(())
    }
    fn lost_power(&mut self) -> bool {
        false
    }
}

struct Bytes<'a>(core::slice::Iter<'a, u8>);

impl CommandInput for Bytes<'_> {
    fn read_byte(&mut self) -> Option<u8> {
        self.0.next().copied()
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let Some((&start, stream)) = data.split_first() else {
        return;
    };
    // First byte picks the start point: the extremes stress range checks.
    let origin = match start % 3 {
        0 => NaiveDateTime::MIN,
        1 => NaiveDateTime::MAX,
        _ => NaiveDateTime::default(),
    };

    let mut clock = MemClock(origin);
    let mut console = ClockConsole::new();
    let mut input = Bytes(stream.iter());

    for &byte in stream {
        let before = clock.0;
        let applied = console.poll(&mut input, &mut clock, &mut Discard);
        match (ClockCommand::from_byte(byte), applied) {
            (Some(cmd), Some(got)) => {
                assert_eq!(cmd, got);
                assert_eq!(clock.0 - before, cmd.delta());
            }
            (Some(cmd), None) => {
                assert!(before.checked_add_signed(cmd.delta()).is_none());
                assert_eq!(clock.0, before);
            }
            (None, applied) => {
                assert!(applied.is_none());
                assert_eq!(clock.0, before);
            }
        }
    }
    assert!(clock.0 - origin <= TimeDelta::hours(stream.len() as i64));
});
