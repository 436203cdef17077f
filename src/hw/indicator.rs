//! Two-color mode indicator.
//!
//! One discrete LED per color, each on its own push-pull output
//! (active-high). Exactly one LED is lit at any time.

use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};
use meteo_station::IndicatorColor;

pub struct Indicator {
    red: Output<'static>,
    green: Output<'static>,
    current: Option<IndicatorColor>,
}

impl Indicator {
    /// Both LEDs start off until the first [`Indicator::show`].
    pub fn new(red: AnyPin, green: AnyPin) -> Self {
        Self {
            red: Output::new(red, Level::Low, OutputDrive::Standard),
            green: Output::new(green, Level::Low, OutputDrive::Standard),
            current: None,
        }
    }

    /// Light the LED for `color`. Does nothing if it is already lit.
    pub fn show(&mut self, color: IndicatorColor) {
        if self.current == Some(color) {
            return;
        }

        // Turn the other LED off first so both are never high together.
        match color {
            IndicatorColor::Red => {
                self.green.set_low();
                self.red.set_high();
            }
            IndicatorColor::Green => {
                self.red.set_low();
                self.green.set_high();
            }
        }
        self.current = Some(color);
    }
}
