//! Clock-adjustment console against a fake clock.

use lampctl::app::commands::ClockCommand;
use lampctl::app::console::ClockConsole;
use lampctl::app::events::AppEvent;

use crate::mock_hw::{FakeClock, RecordingSink, ScriptedInput, date_time};

/// Poll until the input is drained.
fn drain(console: &mut ClockConsole, input: &mut ScriptedInput, clock: &mut FakeClock) -> Vec<ClockCommand> {
    let mut sink = RecordingSink::new();
    let mut applied = Vec::new();
    while !input.bytes.is_empty() {
        if let Some(cmd) = console.poll(input, clock, &mut sink) {
            applied.push(cmd);
        }
    }
    applied
}

#[test]
fn hour_commands_accumulate() {
    let mut console = ClockConsole::new();
    let mut clock = FakeClock::at(10, 0, 0);
    let mut input = ScriptedInput::new(b"HHh");

    let applied = drain(&mut console, &mut input, &mut clock);
    assert_eq!(
        applied,
        [ClockCommand::HourForward, ClockCommand::HourForward, ClockCommand::HourBack]
    );
    assert_eq!(clock.time, date_time(11, 0, 0));
    assert_eq!(console.applied(), 3);
}

#[test]
fn one_byte_per_poll() {
    let mut console = ClockConsole::new();
    let mut clock = FakeClock::at(10, 0, 0);
    let mut input = ScriptedInput::new(b"MM");
    let mut sink = RecordingSink::new();

    console.poll(&mut input, &mut clock, &mut sink);
    assert_eq!(input.bytes.len(), 1);
    assert_eq!(clock.time, date_time(10, 1, 0));
}

#[test]
fn unknown_bytes_are_ignored_silently() {
    let mut console = ClockConsole::new();
    let mut clock = FakeClock::at(10, 0, 0);
    let mut input = ScriptedInput::new(b"x\n?Ss");
    let mut sink = RecordingSink::new();

    while !input.bytes.is_empty() {
        console.poll(&mut input, &mut clock, &mut sink);
    }
    assert_eq!(clock.time, date_time(10, 0, 0));
    assert_eq!(clock.sets, 2);
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::ClockAdjusted { .. })),
        2
    );
    assert_eq!(sink.count(|e| matches!(e, AppEvent::ClockFault(_))), 0);
}

#[test]
fn adjustment_wraps_across_midnight() {
    let mut console = ClockConsole::new();
    let mut clock = FakeClock::at(23, 59, 59);
    let mut input = ScriptedInput::new(b"S");
    drain(&mut console, &mut input, &mut clock);

    assert_eq!(clock.time.date().to_string(), "2024-06-16");
    assert_eq!(clock.time.time().to_string(), "00:00:00");
}

#[test]
fn empty_input_does_nothing() {
    let mut console = ClockConsole::new();
    let mut clock = FakeClock::at(10, 0, 0);
    let mut input = ScriptedInput::default();
    let mut sink = RecordingSink::new();

    assert_eq!(console.poll(&mut input, &mut clock, &mut sink), None);
    assert_eq!(input.polls, 1);
    assert!(sink.events.is_empty());
}

#[test]
fn failed_write_drops_the_command() {
    let mut console = ClockConsole::new();
    let mut clock = FakeClock::at(10, 0, 0);
    clock.fail_writes = true;
    let mut input = ScriptedInput::new(b"H");
    let mut sink = RecordingSink::new();

    assert_eq!(console.poll(&mut input, &mut clock, &mut sink), None);
    assert_eq!(clock.time, date_time(10, 0, 0));
    assert_eq!(console.applied(), 0);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::ClockFault(_))), 1);
}
