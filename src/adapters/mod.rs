//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements       | Connects to                  |
//! |------------|------------------|------------------------------|
//! | `clock`    | ClockPort        | Software RTC over `TimePort` |
//! | `hardware` | LightSensorPort  | ESP32 ADC (LDR)              |
//! |            | LampPort         | ESP32 GPIO (lamp switch)     |
//! | `log_sink` | EventSink        | Serial log output            |
//! | `serial`   | CommandInput     | UART0 / host stdin           |
//! | `time`     | TimePort         | ESP32 system timer           |

pub mod clock;
pub mod hardware;
pub mod log_sink;
pub mod serial;
pub mod time;
