//! Serial link protocol - telemetry out, unit commands in.
//!
//! The station writes one telemetry line per polling cycle and accepts
//! newline-terminated unit commands on the same UART. An off-device bridge
//! republishes the lines to MQTT and forwards dashboard commands back.

pub mod command;
pub mod telemetry;

pub use command::{Command, LineBuffer};
pub use telemetry::{Telemetry, TelemetryFormat, TelemetryLine};
