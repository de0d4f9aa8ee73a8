//! Full main-loop iterations through `AppService` with simulated time.

use lampctl::app::commands::ClockCommand;
use lampctl::app::controller::LampTransition;
use lampctl::app::events::AppEvent;
use lampctl::app::service::AppService;
use lampctl::config::LampConfig;
use lampctl::scheduler::TaskState;

use crate::mock_hw::{FakeClock, LampCall, MockHardware, RecordingSink, ScriptedInput, date_time};

struct Rig {
    app: AppService,
    clock: FakeClock,
    hw: MockHardware,
    input: ScriptedInput,
    sink: RecordingSink,
}

impl Rig {
    fn started(clock: FakeClock, level: u16) -> Self {
        let mut rig = Self {
            app: AppService::new(&LampConfig::default()),
            clock,
            hw: MockHardware::new(level),
            input: ScriptedInput::default(),
            sink: RecordingSink::new(),
        };
        rig.app.start(
            0,
            date_time(0, 0, 0),
            &mut rig.clock,
            &mut rig.hw,
            &mut rig.sink,
        );
        rig
    }

    fn step(&mut self, now_ms: u32) -> lampctl::app::service::LoopOutcome {
        self.app.run_once(
            now_ms,
            &mut self.clock,
            &mut self.hw,
            &mut self.input,
            &mut self.sink,
        )
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_reports_config_and_forces_lamp_off() {
    let rig = Rig::started(FakeClock::at(12, 0, 0), 0);

    assert_eq!(rig.hw.calls, [LampCall::Deactivate]);
    assert!(!rig.app.lamp_enabled());
    assert_eq!(rig.app.lamp_task().state(), TaskState::Running);

    let config = LampConfig::default();
    assert_eq!(
        rig.sink.events,
        [AppEvent::Started {
            time: Some(date_time(12, 0, 0)),
            window: config.window,
            thresholds: config.thresholds,
        }]
    );
}

#[test]
fn start_after_power_loss_falls_back_once() {
    let mut clock = FakeClock::at(12, 0, 0);
    clock.lost_power = true;
    let rig = Rig::started(clock, 0);

    assert_eq!(rig.clock.time, date_time(0, 0, 0));
    assert_eq!(rig.clock.sets, 1);
    assert_eq!(
        rig.sink.events[0],
        AppEvent::ClockFallback {
            time: date_time(0, 0, 0)
        }
    );
}

#[test]
fn failed_fallback_is_not_retried() {
    let mut clock = FakeClock::at(12, 0, 0);
    clock.lost_power = true;
    clock.fail_writes = true;
    let mut rig = Rig::started(clock, 0);

    assert_eq!(
        rig.sink.count(|e| matches!(e, AppEvent::ClockFault(_))),
        1
    );
    for t in (0..=5_000).step_by(100) {
        rig.step(t);
    }
    assert_eq!(rig.clock.sets, 0);
    assert_eq!(
        rig.sink.count(|e| matches!(e, AppEvent::ClockFault(_))),
        1
    );
}

// ── Cadence ───────────────────────────────────────────────────

#[test]
fn decision_runs_once_per_interval() {
    let mut rig = Rig::started(FakeClock::at(12, 0, 0), 500);

    let mut checks = Vec::new();
    for t in (0..=100_000).step_by(10) {
        if rig.step(t).checked {
            checks.push(t);
        }
    }
    assert_eq!(checks.len(), 100);
    assert_eq!(checks.first(), Some(&1_000));
    assert_eq!(checks.last(), Some(&100_000));
    assert_eq!(rig.hw.reads, 100);
    assert_eq!(rig.app.lamp_task().fire_count(), 100);
    assert_eq!(rig.app.loop_count(), 10_001);
}

#[test]
fn lamp_tick_runs_every_iteration() {
    let mut rig = Rig::started(FakeClock::at(12, 0, 0), 500);
    for t in [0, 3, 7, 1_000, 1_001] {
        rig.step(t);
    }
    assert_eq!(rig.hw.ticks, [0, 3, 7, 1_000, 1_001]);
}

// ── Ordering inside one iteration ─────────────────────────────

#[test]
fn tick_then_decision_then_command() {
    // 04:30 and dark: outside the window until the console adds an hour.
    let mut rig = Rig::started(FakeClock::at(4, 30, 0), 0);
    rig.hw.clear_calls();
    rig.input.push(b"H");

    let first = rig.step(1_000);
    assert!(first.checked);
    assert_eq!(first.transition, None);
    assert_eq!(first.command, Some(ClockCommand::HourForward));
    assert_eq!(rig.hw.trace, ["tick", "read"]);
    assert_eq!(rig.clock.time, date_time(5, 30, 0));

    let second = rig.step(2_000);
    assert_eq!(second.transition, Some(LampTransition::Activated));
    assert_eq!(second.command, None);
    assert_eq!(rig.hw.trace, ["tick", "read", "tick", "read", "activate"]);
}

#[test]
fn console_runs_between_decisions() {
    let mut rig = Rig::started(FakeClock::at(10, 0, 0), 500);
    rig.input.push(b"MMm");

    let commands: Vec<_> = (1..=3).filter_map(|t| rig.step(t).command).collect();
    assert_eq!(commands.len(), 3);
    assert_eq!(rig.clock.time, date_time(10, 1, 0));
    assert_eq!(rig.app.commands_applied(), 3);
    assert_eq!(rig.app.lamp_task().fire_count(), 0);
}

// ── Evening scenario ──────────────────────────────────────────

#[test]
fn dusk_to_off_time() {
    let mut rig = Rig::started(FakeClock::at(22, 29, 56), 40);
    rig.hw.clear_calls();
    let mut now = 0;
    let mut tick = |rig: &mut Rig| {
        now += 1_000;
        rig.clock.advance_ms(1_000);
        rig.step(now)
    };

    // 22:29:57, still bright.
    assert_eq!(tick(&mut rig).transition, None);
    // 22:29:58, dark.
    rig.hw.set_level(5);
    assert_eq!(tick(&mut rig).transition, Some(LampTransition::Activated));
    // 22:29:59, inside the band: stays lit.
    rig.hw.set_level(20);
    assert_eq!(tick(&mut rig).transition, None);
    // 22:30:00, off time.
    assert_eq!(tick(&mut rig).transition, Some(LampTransition::Deactivated));
    // After off time darkness no longer matters.
    rig.hw.set_level(0);
    assert_eq!(tick(&mut rig).transition, None);

    assert_eq!(rig.hw.calls, [LampCall::Activate, LampCall::Deactivate]);
}
