//! GPIO / peripheral pin assignments for the lamp controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Lamp switch (Q2 MOSFET gate)
// ---------------------------------------------------------------------------

/// Digital output: HIGH = lamp on.  Shares the on-board LED so the lamp
/// state is visible on the bench.
pub const LAMP_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// Light-dependent resistor (ADC1)
// ---------------------------------------------------------------------------

/// LDR voltage divider, ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const LDR_ADC_GPIO: i32 = 1;
/// ADC1 channel number for the LDR.
pub const LDR_ADC_CHANNEL: u32 = 0;

// ---------------------------------------------------------------------------
// UART console (clock adjustment commands)
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 43;
pub const UART_RX_GPIO: i32 = 44;
/// UART peripheral used for the console.
pub const UART_PORT: i32 = 0;
