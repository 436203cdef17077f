//! Remote unit selection over the serial link.
//!
//! Accepted lines (surrounding whitespace ignored):
//!   - `C` / `F` (any case)
//!   - `{"unit":"C"}` / `{"unit":"F"}`, as published by the bridge on its
//!     command topic

use core::mem;

use heapless::{String, Vec};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::mode::DisplayMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    SetUnit(DisplayMode),
}

#[derive(Deserialize)]
struct UnitCommand {
    unit: DisplayMode,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.starts_with('{') {
            let (command, _) = serde_json_core::from_str::<UnitCommand>(line)
                .map_err(|_| Error::InvalidCommand)?;
            return Ok(Command::SetUnit(command.unit));
        }

        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => DisplayMode::from_symbol(symbol)
                .map(Command::SetUnit)
                .ok_or(Error::InvalidCommand),
            _ => Err(Error::InvalidCommand),
        }
    }
}

/// Accumulates received bytes into newline-terminated lines.
///
/// A trailing `\r` is stripped and blank lines are skipped. A line longer
/// than `N` bytes is dropped up to the next `\n` and reported once as
/// [`Error::BufferOverflow`].
#[derive(Debug, Default)]
pub struct LineBuffer<const N: usize> {
    buf: Vec<u8, N>,
    overflowed: bool,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            overflowed: false,
        }
    }

    /// Feed one byte. Returns the finished line when `byte` is `\n`.
    pub fn push(&mut self, byte: u8) -> Option<Result<String<N>>> {
        if byte != b'\n' {
            if !self.overflowed && self.buf.push(byte).is_err() {
                self.overflowed = true;
                self.buf.clear();
            }
            return None;
        }

        if mem::take(&mut self.overflowed) {
            return Some(Err(Error::BufferOverflow));
        }

        let mut line = mem::take(&mut self.buf);
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.is_empty() {
            return None;
        }
        Some(String::from_utf8(line).map_err(|_| Error::InvalidCommand))
    }
}
