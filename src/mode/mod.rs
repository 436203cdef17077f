//! Display mode selection: which unit the temperature is shown in, and the
//! LED color that signals it.
//!
//! ## Components
//!
//! - **Controller**: button edge detection and per-cycle conversion
//! - **Convert**: unit conversion helpers

pub mod controller;
pub mod convert;


pub use controller::{ModeToggleController, Reading};
pub use convert::fahrenheit_to_celsius;

use serde::{Deserialize, Serialize};

/// Temperature unit currently selected for output.
///
/// Serializes as the single-letter symbol used on the wire (`"C"` / `"F"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    #[serde(rename = "C")]
    Celsius,
    #[default]
    #[serde(rename = "F")]
    Fahrenheit,
}

impl DisplayMode {
    /// The other unit.
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Celsius => DisplayMode::Fahrenheit,
            DisplayMode::Fahrenheit => DisplayMode::Celsius,
        }
    }

    /// LED color that signals this mode.
    pub fn color(self) -> IndicatorColor {
        match self {
            DisplayMode::Celsius => IndicatorColor::Green,
            DisplayMode::Fahrenheit => IndicatorColor::Red,
        }
    }

    /// Parse a unit symbol, ignoring case.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'C' => Some(DisplayMode::Celsius),
            'F' => Some(DisplayMode::Fahrenheit),
            _ => None,
        }
    }

    /// Express a raw (Fahrenheit-equivalent) reading in this unit.
    pub fn convert(self, raw: f32) -> f32 {
        match self {
            DisplayMode::Celsius => fahrenheit_to_celsius(raw),
            DisplayMode::Fahrenheit => raw,
        }
    }
}

/// Two-color LED indicator. Exactly one of the two LEDs is lit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorColor {
    Red,
    Green,
}
