//! Mock adapters for integration tests.
//!
//! Records every lamp call and every emitted event so tests can assert on
//! the full history without touching real GPIO or ADC registers.

use std::collections::VecDeque;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use lampctl::app::events::AppEvent;
use lampctl::app::ports::{ClockError, ClockPort, CommandInput, EventSink, LampPort, LightSensorPort};
use lampctl::control::LightLevel;

// ── Lamp call record ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampCall {
    Activate,
    Deactivate,
}

// ── MockHardware ──────────────────────────────────────────────

/// Light sensor plus lamp.  Readings are served from a script; once it
/// runs dry the last value repeats.
pub struct MockHardware {
    pub readings: VecDeque<LightLevel>,
    pub current_level: LightLevel,
    pub reads: u32,
    pub calls: Vec<LampCall>,
    pub ticks: Vec<u32>,
    /// Every port call in order: `tick`, `read`, `activate`, `deactivate`.
    pub trace: Vec<&'static str>,
    on: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(level: LightLevel) -> Self {
        Self {
            readings: VecDeque::new(),
            current_level: level,
            reads: 0,
            calls: Vec::new(),
            ticks: Vec::new(),
            trace: Vec::new(),
            on: false,
        }
    }

    pub fn scripted(readings: &[LightLevel]) -> Self {
        let mut hw = Self::new(readings.first().copied().unwrap_or(0));
        hw.readings = readings.iter().copied().collect();
        hw
    }

    pub fn set_level(&mut self, level: LightLevel) {
        self.readings.clear();
        self.current_level = level;
    }

    pub fn last_call(&self) -> Option<LampCall> {
        self.calls.last().copied()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
        self.trace.clear();
    }
}

impl LightSensorPort for MockHardware {
    fn read_level(&mut self) -> LightLevel {
        self.reads += 1;
        self.trace.push("read");
        if let Some(level) = self.readings.pop_front() {
            self.current_level = level;
        }
        self.current_level
    }
}

impl LampPort for MockHardware {
    fn activate(&mut self) {
        self.on = true;
        self.calls.push(LampCall::Activate);
        self.trace.push("activate");
    }

    fn deactivate(&mut self) {
        self.on = false;
        self.calls.push(LampCall::Deactivate);
        self.trace.push("deactivate");
    }

    fn tick(&mut self, now_ms: u32) {
        self.ticks.push(now_ms);
        self.trace.push("tick");
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

// ── FakeClock ─────────────────────────────────────────────────

/// Settable wall clock.  Time only moves when a test says so.
pub struct FakeClock {
    pub time: NaiveDateTime,
    pub lost_power: bool,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub sets: u32,
}

#[allow(dead_code)]
impl FakeClock {
    pub fn at(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            time: date_time(hour, minute, second),
            lost_power: false,
            fail_reads: false,
            fail_writes: false,
            sets: 0,
        }
    }

    pub fn set_hms(&mut self, hour: u32, minute: u32, second: u32) {
        self.time = date_time(hour, minute, second);
    }

    pub fn advance_ms(&mut self, ms: i64) {
        self.time += TimeDelta::milliseconds(ms);
    }
}

impl ClockPort for FakeClock {
    fn now(&mut self) -> Result<NaiveDateTime, ClockError> {
        if self.fail_reads {
            return Err(ClockError::ReadFailed);
        }
        Ok(self.time)
    }

    fn set(&mut self, time: NaiveDateTime) -> Result<(), ClockError> {
        if self.fail_writes {
            return Err(ClockError::WriteFailed);
        }
        self.time = time;
        self.lost_power = false;
        self.sets += 1;
        Ok(())
    }

    fn lost_power(&mut self) -> bool {
        self.lost_power
    }
}

/// A fixed date at the given time of day.
pub fn date_time(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

// ── ScriptedInput ─────────────────────────────────────────────

#[derive(Default)]
pub struct ScriptedInput {
    pub bytes: VecDeque<u8>,
    pub polls: u32,
}

#[allow(dead_code)]
impl ScriptedInput {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
            polls: 0,
        }
    }

    pub fn push(&mut self, bytes: &[u8]) {
        self.bytes.extend(bytes.iter().copied());
    }
}

impl CommandInput for ScriptedInput {
    fn read_byte(&mut self) -> Option<u8> {
        self.polls += 1;
        self.bytes.pop_front()
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
