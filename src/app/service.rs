//! Application service, the hexagonal core.
//!
//! [`AppService`] owns the decision controller, the periodic task that
//! drives it, and the clock console.  All I/O flows through port traits
//! passed in at each call, so one loop iteration can be replayed against
//! fakes with simulated time.
//!
//! ```text
//!  ClockPort ───────▶ ┌─────────────────────────────┐ ──▶ EventSink
//!  LightSensorPort ──▶│         AppService          │
//!  CommandInput ─────▶│ PeriodicTask · Controller   │
//!  LampPort ◀─────────│ ClockConsole                │
//!                     └─────────────────────────────┘
//! ```
//!
//! Ordering within one [`run_once`](AppService::run_once):
//! lamp housekeeping → periodic task (maybe a decision) → console byte.

use chrono::NaiveDateTime;
use log::{info, warn};

use crate::config::LampConfig;
use crate::scheduler::PeriodicTask;

use super::commands::ClockCommand;
use super::console::ClockConsole;
use super::controller::{LampController, LampTransition};
use super::events::AppEvent;
use super::ports::{ClockPort, CommandInput, EventSink, LampPort, LightSensorPort};

/// What happened during one main-loop iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopOutcome {
    /// The periodic task fired and a lamp decision ran.
    pub checked: bool,
    /// The lamp changed state during that decision.
    pub transition: Option<LampTransition>,
    /// A console command was applied to the clock.
    pub command: Option<ClockCommand>,
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

pub struct AppService {
    controller: LampController,
    lamp_task: PeriodicTask,
    console: ClockConsole,
    loop_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** start the periodic task; call [`start`](Self::start).
    pub fn new(config: &LampConfig) -> Self {
        Self {
            controller: LampController::new(config),
            lamp_task: PeriodicTask::new("lamp_state_task", config.poll_interval_ms),
            console: ClockConsole::new(),
            loop_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Startup sequence.
    ///
    /// 1. Reset the clock to `fallback` if it lost power (once, no retry).
    /// 2. Report the current time and the configuration.
    /// 3. Start the periodic task with `now_ms` as baseline.
    /// 4. Force the lamp off.
    pub fn start(
        &mut self,
        now_ms: u32,
        fallback: NaiveDateTime,
        clock: &mut impl ClockPort,
        lamp: &mut impl LampPort,
        sink: &mut impl EventSink,
    ) {
        if clock.lost_power() {
            match clock.set(fallback) {
                Ok(()) => sink.emit(&AppEvent::ClockFallback { time: fallback }),
                Err(e) => {
                    warn!("RTC fallback failed: {}", e);
                    sink.emit(&AppEvent::ClockFault(e));
                }
            }
        }

        let time = match clock.now() {
            Ok(t) => Some(t),
            Err(e) => {
                sink.emit(&AppEvent::ClockFault(e));
                None
            }
        };
        sink.emit(&AppEvent::Started {
            time,
            window: *self.controller.window(),
            thresholds: *self.controller.thresholds(),
        });
        if self.controller.window().is_overnight() {
            warn!(
                "Schedule window {} never opens (off time not after on time)",
                self.controller.window()
            );
        }

        self.lamp_task.start(now_ms);
        self.controller.reset(lamp);
        info!("AppService started");
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// Run one main-loop iteration.  Never blocks.
    ///
    /// The `hw` parameter satisfies **both** [`LightSensorPort`] and
    /// [`LampPort`], which avoids a double mutable borrow while keeping
    /// the port boundary explicit.
    pub fn run_once(
        &mut self,
        now_ms: u32,
        clock: &mut impl ClockPort,
        hw: &mut (impl LightSensorPort + LampPort),
        input: &mut impl CommandInput,
        sink: &mut impl EventSink,
    ) -> LoopOutcome {
        self.loop_count += 1;
        let mut outcome = LoopOutcome::default();

        // 1. Lamp housekeeping, unconditionally.
        hw.tick(now_ms);

        // 2. Periodic lamp decision.
        let controller = &mut self.controller;
        outcome.checked = self.lamp_task.update(now_ms, || {
            outcome.transition = controller.check_lamp_state(clock, hw, sink);
        });

        // 3. At most one console byte.
        outcome.command = self.console.poll(input, clock, sink);

        outcome
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn lamp_enabled(&self) -> bool {
        self.controller.lamp_enabled()
    }

    pub fn lamp_task(&self) -> &PeriodicTask {
        &self.lamp_task
    }

    /// Main-loop iterations executed since construction.
    pub fn loop_count(&self) -> u64 {
        self.loop_count
    }

    /// Console commands applied since startup.
    pub fn commands_applied(&self) -> u32 {
        self.console.applied()
    }
}
