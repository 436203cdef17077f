//! Button-driven display mode state machine.
//!
//! Called once per polling cycle with the sampled button line and the raw
//! temperature. The button sample is the line level as read: with the
//! active-low wiring, `true` means the line is pulled high (released) and
//! `false` means it is held low (pressed). A `false` → `true` edge, i.e. the
//! button being released, flips the unit; the indicator color is derived
//! from the unit so the two can never disagree.

use super::{DisplayMode, IndicatorColor};

/// Output of one polling cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Temperature expressed in the selected unit.
    pub temperature: f32,
    pub color: IndicatorColor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeToggleController {
    mode: DisplayMode,
    /// Button line level seen on the previous poll.
    last_button: bool,
}

impl ModeToggleController {
    /// Create a controller in `mode`, treating `button` as the line level of
    /// the poll before the first one. Pass the idle level of the line so
    /// power-up does not count as an edge.
    pub const fn new(mode: DisplayMode, button: bool) -> Self {
        Self {
            mode,
            last_button: button,
        }
    }

    /// Pure state transition for one button sample.
    pub fn step(self, button: bool) -> Self {
        let mode = if button && !self.last_button {
            self.mode.toggled()
        } else {
            self.mode
        };
        Self {
            mode,
            last_button: button,
        }
    }

    /// Advance by one cycle and convert `raw_temperature` to the (possibly
    /// new) selected unit.
    pub fn poll(&mut self, button: bool, raw_temperature: f32) -> Reading {
        *self = self.step(button);
        Reading {
            temperature: self.mode.convert(raw_temperature),
            color: self.color(),
        }
    }

    /// Select a unit directly. Returns whether the mode changed.
    ///
    /// The stored button state is left alone, so the next poll still sees
    /// the same edge (or lack of one) it would have seen otherwise.
    pub fn select(&mut self, mode: DisplayMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn color(&self) -> IndicatorColor {
        self.mode.color()
    }
}

impl Default for ModeToggleController {
    /// Fahrenheit, with the previous button sample taken as `false`.
    fn default() -> Self {
        Self::new(DisplayMode::default(), false)
    }
}
