//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and serial protocol
//! constants live here so they can be tuned in one place.

use crate::mode::DisplayMode;
use crate::serial::telemetry::TelemetryFormat;

// Polling

/// Delay between two polling cycles (ms).
pub const POLL_INTERVAL_MS: u64 = 100;

/// Unit selected at power-up.
pub const DEFAULT_DISPLAY_MODE: DisplayMode = DisplayMode::Fahrenheit;

/// Button line level while released (active-low with pull-up).
pub const BUTTON_IDLE_LEVEL: bool = true;

// Serial

/// UART baud rate for telemetry and commands.
pub const SERIAL_BAUD: u32 = 115_200;

/// Line printed once after the UART comes up.
pub const READY_BANNER: &str = "READY\r\n";

/// What each telemetry line contains.
pub const TELEMETRY_FORMAT: TelemetryFormat = TelemetryFormat::Json;

/// Capacity of one rendered telemetry line, terminator included (bytes).
pub const TELEMETRY_LINE_CAPACITY: usize = 96;

/// Longest accepted command line, terminator excluded (bytes).
pub const COMMAND_LINE_CAPACITY: usize = 32;

/// UARTE receive ring buffer (bytes).
pub const UART_RX_BUFFER_SIZE: usize = 64;

/// UARTE transmit ring buffer (bytes).
pub const UART_TX_BUFFER_SIZE: usize = 128;

/// Parsed commands waiting for the polling loop.
pub const COMMAND_QUEUE_DEPTH: usize = 4;

// GPIO / analog pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button (mode)      → P0.11  (active-low, internal pull-up)
//   LED red            → P0.13
//   LED green          → P0.14
//   Humidity sensor    → P0.03  (AIN1)
//   Temperature sensor → P0.04  (AIN2)
//   UART TX            → P0.06
//   UART RX            → P0.08
//   UART RX timer      → TIMER0, PPI_CH0/PPI_CH1, PPI_GROUP0
