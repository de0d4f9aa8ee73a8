//! Lamp controller firmware main entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter     SoftRtc       SerialConsole  LogEventSink │
//! │  (LightSensor+Lamp)  (ClockPort)   (CommandInput) (EventSink)  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  ScheduleWindow · LightThresholds · ClockConsole       │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  PeriodicTask (1 s lamp decision) · MonotonicClock (ms)        │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use lampctl::adapters::clock::{SoftRtc, build_time};
use lampctl::adapters::hardware::HardwareAdapter;
use lampctl::adapters::log_sink::LogEventSink;
use lampctl::adapters::serial::SerialConsole;
use lampctl::adapters::time::MonotonicClock;
use lampctl::app::ports::TimePort;
use lampctl::app::service::AppService;
use lampctl::config::LampConfig;
use lampctl::drivers::gpio::GpioPin;
use lampctl::drivers::hw_init;
use lampctl::drivers::lamp::LampDriver;
use lampctl::pins;
use lampctl::sensors::LightSensor;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Bootstrap: config + logger ─────────────────────────
    let (config, config_note) = load_config();
    init_logger(&config)?;

    info!("╔══════════════════════════════════════╗");
    info!("║  lampctl v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");
    if let Some(note) = config_note {
        log::warn!("{}", note);
    }

    // ── 2. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals(config.serial_baud)?;

    let time = MonotonicClock::new();
    let mut clock = SoftRtc::unset(MonotonicClock::new());
    let lamp = LampDriver::new(GpioPin::new(pins::LAMP_GPIO), config.lamp_min_switch_ms);
    let mut hw = HardwareAdapter::new(LightSensor::new(pins::LDR_ADC_GPIO), lamp);
    let mut console = SerialConsole::new();
    let mut sink = LogEventSink::new();

    // ── 3. Startup sequence ───────────────────────────────────
    let mut app = AppService::new(&config);
    app.start(time.millis(), build_time(), &mut clock, &mut hw, &mut sink);

    // ── 4. Main loop ──────────────────────────────────────────
    loop {
        app.run_once(time.millis(), &mut clock, &mut hw, &mut console, &mut sink);
        idle();
    }
}

// ── Helpers ───────────────────────────────────────────────────

/// Configuration for this run, plus a warning to log once the logger is up.
///
/// The host binary reads an optional JSON file named by the first argument.
/// Anything unusable falls back to the compiled-in defaults.
#[cfg(not(target_os = "espidf"))]
fn load_config() -> (LampConfig, Option<String>) {
    let Some(path) = std::env::args().nth(1) else {
        return (LampConfig::default(), None);
    };
    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|text| LampConfig::from_json(&text).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => (config, Some(format!("Config loaded from {}", path))),
        Err(e) => (
            LampConfig::default(),
            Some(format!("Config {} rejected ({}), using defaults", path, e)),
        ),
    }
}

#[cfg(target_os = "espidf")]
fn load_config() -> (LampConfig, Option<String>) {
    (LampConfig::default(), None)
}

#[cfg(not(target_os = "espidf"))]
fn init_logger(config: &LampConfig) -> Result<()> {
    let default = config.log_level.as_str();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}

#[cfg(target_os = "espidf")]
fn init_logger(config: &LampConfig) -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    if let Some(filter) = config.log_filter() {
        log::set_max_level(filter);
    }
    Ok(())
}

/// Yield between iterations so the loop does not starve other tasks.
#[cfg(not(target_os = "espidf"))]
fn idle() {
    std::thread::sleep(std::time::Duration::from_millis(1));
}

#[cfg(target_os = "espidf")]
fn idle() {
    esp_idf_hal::delay::FreeRtos::delay_ms(1);
}
