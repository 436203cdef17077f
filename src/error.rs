//! Unified error type for meteo-station.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Serial
    /// UARTE transfer failed.
    Uart,

    /// A line did not fit in its fixed-size buffer.
    BufferOverflow,

    // Commands
    /// A received line is not a known command.
    InvalidCommand,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Uart => f.write_str("UART transfer failed"),
            Error::BufferOverflow => f.write_str("line exceeds buffer capacity"),
            Error::InvalidCommand => f.write_str("invalid unit (C or F)"),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::BufferOverflow
    }
}

pub type Result<T> = core::result::Result<T, Error>;
