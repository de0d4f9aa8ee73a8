//! Clock-adjustment console.
//!
//! Consumes at most one byte per main-loop iteration from a non-blocking
//! [`CommandInput`] and applies the matching [`ClockCommand`] to the clock.
//! Unknown bytes are dropped silently.  There is no echo and no reply: the
//! new time shows up in the next time check.

use log::warn;

use super::commands::ClockCommand;
use super::events::AppEvent;
use super::ports::{ClockPort, CommandInput, EventSink};

#[derive(Debug, Default)]
pub struct ClockConsole {
    applied: u32,
}

impl ClockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle the next pending byte, if any.  Returns the command that was
    /// applied to the clock.
    pub fn poll(
        &mut self,
        input: &mut impl CommandInput,
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) -> Option<ClockCommand> {
        let command = ClockCommand::from_byte(input.read_byte()?)?;

        match clock.adjust(command.delta()) {
            Ok(time) => {
                self.applied = self.applied.wrapping_add(1);
                sink.emit(&AppEvent::ClockAdjusted { command, time });
                Some(command)
            }
            Err(e) => {
                warn!("console: {:?} dropped ({})", command, e);
                sink.emit(&AppEvent::ClockFault(e));
                None
            }
        }
    }

    /// Number of commands successfully applied since startup.
    pub fn applied(&self) -> u32 {
        self.applied
    }
}
