//! Lamp decision controller.
//!
//! Combines the schedule window and the light hysteresis into one on/off
//! decision and drives the lamp only when that decision changes.
//!
//! ```text
//!  ClockPort ──▶ TimeOfDay ──▶ window.contains ──┐
//!                                                AND ──▶ new state ──▶ changed? ──▶ LampPort
//!  LightSensorPort ──▶ level ──▶ light_condition ┘                       │
//!                                   ▲                                     │
//!                                   └──────── lamp_enabled ◀──────────────┘
//! ```
//!
//! `lamp_enabled` is the only mutable state and this is its only writer.
//! The hysteresis check reads it, so the decision at check N depends on the
//! state committed at check N−1.

use crate::config::LampConfig;
use crate::control::{LightThresholds, ScheduleWindow, TimeOfDay};

use super::events::AppEvent;
use super::ports::{ClockPort, EventSink, LampPort, LightSensorPort};

/// A committed change of lamp state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampTransition {
    Activated,
    Deactivated,
}

/// Owns the lamp-enabled flag and the immutable decision parameters.
pub struct LampController {
    window: ScheduleWindow,
    thresholds: LightThresholds,
    lamp_enabled: bool,
}

impl LampController {
    pub fn new(config: &LampConfig) -> Self {
        Self {
            window: config.window,
            thresholds: config.thresholds,
            lamp_enabled: false,
        }
    }

    /// Commit the startup state: flag cleared and lamp commanded off.
    pub fn reset(&mut self, lamp: &mut impl LampPort) {
        self.lamp_enabled = false;
        lamp.deactivate();
    }

    /// Run one decision.  Returns the transition if the lamp changed state.
    ///
    /// Both conditions are evaluated (and reported) on every call.  A clock
    /// that cannot be read counts as outside the window, which turns a lit
    /// lamp off.
    pub fn check_lamp_state(
        &mut self,
        clock: &mut impl ClockPort,
        hw: &mut (impl LightSensorPort + LampPort),
        sink: &mut impl EventSink,
    ) -> Option<LampTransition> {
        let in_window = self.time_condition(clock, sink);
        let dark_enough = self.ambient_light_condition(hw, sink);
        let new_state = in_window && dark_enough;

        let transition = if new_state != self.lamp_enabled {
            let transition = if new_state {
                hw.activate();
                sink.emit(&AppEvent::LampActivated);
                LampTransition::Activated
            } else {
                hw.deactivate();
                sink.emit(&AppEvent::LampDeactivated);
                LampTransition::Deactivated
            };
            self.lamp_enabled = new_state;
            Some(transition)
        } else {
            None
        };

        sink.emit(&AppEvent::LampState(self.lamp_enabled));
        transition
    }

    pub fn lamp_enabled(&self) -> bool {
        self.lamp_enabled
    }

    pub fn window(&self) -> &ScheduleWindow {
        &self.window
    }

    pub fn thresholds(&self) -> &LightThresholds {
        &self.thresholds
    }

    // ── Internal ──────────────────────────────────────────────

    fn time_condition(&self, clock: &mut impl ClockPort, sink: &mut impl EventSink) -> bool {
        match clock.now() {
            Ok(now) => {
                let time = TimeOfDay::of(&now);
                let in_window = self.window.contains(time);
                sink.emit(&AppEvent::TimeChecked {
                    time: Some(time),
                    in_window,
                });
                in_window
            }
            Err(e) => {
                sink.emit(&AppEvent::ClockFault(e));
                sink.emit(&AppEvent::TimeChecked {
                    time: None,
                    in_window: false,
                });
                false
            }
        }
    }

    fn ambient_light_condition(
        &self,
        sensor: &mut impl LightSensorPort,
        sink: &mut impl EventSink,
    ) -> bool {
        let level = sensor.read_level();
        let dark_enough = self.thresholds.light_condition(level, self.lamp_enabled);
        sink.emit(&AppEvent::LightChecked { level, dark_enough });
        dark_enough
    }
}
