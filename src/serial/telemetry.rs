//! Per-cycle telemetry line.
//!
//! Two formats:
//! - `Humidity`: the bare humidity value with two decimals, e.g. `512.00`
//! - `Json`: `{"temperature":68.0,"humidity":512.0,"unit":"F"}`, the record
//!   consumed by the MQTT bridge and dashboards
//!
//! Lines end with `\r\n`.

use core::fmt::Write;

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::config::TELEMETRY_LINE_CAPACITY;
use crate::error::{Error, Result};
use crate::mode::DisplayMode;

/// One rendered telemetry line, terminator included.
pub type TelemetryLine = String<TELEMETRY_LINE_CAPACITY>;

const LINE_END: &str = "\r\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TelemetryFormat {
    Humidity,
    Json,
}

/// Sensor values for one polling cycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Telemetry {
    /// Temperature in `unit`.
    pub temperature: f32,
    /// Raw humidity reading.
    pub humidity: f32,
    pub unit: DisplayMode,
}

impl Telemetry {
    /// Render a single line in the given format.
    pub fn render(&self, format: TelemetryFormat) -> Result<TelemetryLine> {
        self.render_with_capacity::<TELEMETRY_LINE_CAPACITY>(format)
    }

    /// Render into a line of capacity `N`, terminator included. Fails with
    /// [`Error::BufferOverflow`] when the line does not fit.
    pub fn render_with_capacity<const N: usize>(
        &self,
        format: TelemetryFormat,
    ) -> Result<String<N>> {
        let mut line = match format {
            TelemetryFormat::Humidity => {
                let mut line = String::<N>::new();
                write!(line, "{:.2}", self.humidity)?;
                line
            }
            TelemetryFormat::Json => {
                serde_json_core::to_string::<_, N>(self).map_err(|_| Error::BufferOverflow)?
            }
        };
        line.push_str(LINE_END).map_err(|_| Error::BufferOverflow)?;
        Ok(line)
    }
}
