//! Non-blocking periodic task.
//!
//! The main loop calls [`PeriodicTask::update`] on every iteration with the
//! current millisecond counter.  When the interval has elapsed the bound
//! callback runs once and the baseline advances by exactly one interval,
//! so late calls do not push later firings back.
//!
//! ```text
//!   baseline          baseline + interval      baseline + 2·interval
//!      │──────────────────────│─────────────────────────│
//!      ▲ start()          ▲ update() fires here,  ▲ next firing is
//!                         │ even if called late   │ still on the grid
//! ```
//!
//! Elapsed time is `now.wrapping_sub(baseline)`, which stays correct when
//! the 32-bit millisecond counter wraps (every ~49.7 days).

use log::info;

/// Lifecycle of a [`PeriodicTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Constructed but not started; `update` does nothing.
    Idle,
    /// Firing every `interval_ms`.
    Running,
}

/// A fixed-cadence timer driven by explicit `update` calls.
#[derive(Debug, Clone)]
pub struct PeriodicTask {
    /// Human-readable label used in logs.
    label: &'static str,
    interval_ms: u32,
    state: TaskState,
    /// Timestamp of the last firing, or of `start()` before the first one.
    baseline_ms: u32,
    /// Number of times the callback has run.
    fire_count: u32,
}

impl PeriodicTask {
    pub fn new(label: &'static str, interval_ms: u32) -> Self {
        Self {
            label,
            interval_ms,
            state: TaskState::Idle,
            baseline_ms: 0,
            fire_count: 0,
        }
    }

    /// Begin firing.  The first firing is one interval after `now_ms`.
    pub fn start(&mut self, now_ms: u32) {
        self.baseline_ms = now_ms;
        self.fire_count = 0;
        self.state = TaskState::Running;
        info!("{}: started (every {} ms)", self.label, self.interval_ms);
    }

    /// Run `on_fire` if the interval has elapsed.  Returns whether it ran.
    ///
    /// Fires at most once per call.  If the loop stalled for several
    /// intervals, successive calls catch up one firing at a time.
    pub fn update(&mut self, now_ms: u32, on_fire: impl FnOnce()) -> bool {
        if self.state != TaskState::Running {
            return false;
        }
        if self.elapsed(now_ms) < self.interval_ms {
            return false;
        }

        self.baseline_ms = self.baseline_ms.wrapping_add(self.interval_ms);
        self.fire_count = self.fire_count.wrapping_add(1);
        on_fire();
        true
    }

    /// Milliseconds since the last firing (or since `start`).
    pub fn elapsed(&self, now_ms: u32) -> u32 {
        match self.state {
            TaskState::Running => now_ms.wrapping_sub(self.baseline_ms),
            TaskState::Idle => 0,
        }
    }

    /// Milliseconds until the next firing is due (0 when overdue).
    pub fn remaining(&self, now_ms: u32) -> u32 {
        match self.state {
            TaskState::Running => self.interval_ms.saturating_sub(self.elapsed(now_ms)),
            TaskState::Idle => self.interval_ms,
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn fire_count(&self) -> u32 {
        self.fire_count
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
