//! Host-testable logic for the meteo-station firmware.
//!
//! This crate holds the pure logic that can be tested on the host (no
//! embedded hardware required): the button-driven display mode state
//! machine, unit conversion, and the serial telemetry/command protocol.
//!
//! Usage: `cargo test --lib` / `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and links against this library for its logic; the hardware glue lives in
//! `src/hw/` and is only built with the `embedded` feature.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod mode;
pub mod serial;

pub use error::{Error, Result};
pub use mode::{DisplayMode, IndicatorColor, ModeToggleController, Reading};
