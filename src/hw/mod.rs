//! Board glue - the thin layer between the nRF52840 peripherals and the
//! host-testable logic in the library.
//!
//! ## Components
//!
//! - **Indicator**: red/green LED pair on two GPIO outputs
//! - **Sensors**: humidity + temperature on two SAADC channels
//! - **UART**: telemetry writer and command reader

pub mod indicator;
pub mod sensors;
pub mod uart;
