//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the logger
//! (UART on the board, stderr on the host).  Per-check diagnostics go out
//! at `debug`, lamp transitions and the startup report at `info`.

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

const DATE_TIME_FMT: &str = "%Y/%m/%d %H:%M:%S";

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started {
                time,
                window,
                thresholds,
            } => {
                info!("Lamp controller started");
                match time {
                    Some(t) => info!("Time: {}", t.format(DATE_TIME_FMT)),
                    None => info!("Time: unavailable"),
                }
                info!("On time: {}", window.on_time());
                info!("Off time: {}", window.off_time());
                info!("LDR thresholds: {}", thresholds);
            }
            AppEvent::ClockFallback { time } => {
                warn!("RTC lost power, time set to {}", time.format(DATE_TIME_FMT));
            }
            AppEvent::TimeChecked { time, in_window } => match time {
                Some(t) => debug!("Time check: {} - {}", t, in_window),
                None => debug!("Time check: --:--:-- - {}", in_window),
            },
            AppEvent::LightChecked { level, dark_enough } => {
                debug!("LDR level: {} - {}", level, dark_enough);
            }
            AppEvent::LampActivated => info!("Lamp activated"),
            AppEvent::LampDeactivated => info!("Lamp deactivated"),
            AppEvent::LampState(on) => debug!("Lamp state: {}", on),
            AppEvent::ClockAdjusted { command, time } => {
                info!("Clock {:?}: {}", command, time.format(DATE_TIME_FMT));
            }
            AppEvent::ClockFault(e) => warn!("RTC fault: {}", e),
        }
    }
}
