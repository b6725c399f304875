//! GPIO pin implementations
//!
//! Newtype wrappers over embassy-rp pins. Wrappers are needed because
//! both the traits and the embassy types live in foreign crates.

use embassy_rp::gpio::{Input, Output};

use aktis_hal::{InputPin, OutputPin};

/// Digital input backed by an embassy-rp GPIO input
pub struct DigitalInput {
    pin: Input<'static>,
}

impl DigitalInput {
    /// Wrap a configured embassy-rp input pin
    ///
    /// Pull configuration is left to the caller; the gate sensor board
    /// provides its own biasing.
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl InputPin for DigitalInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Digital output backed by an embassy-rp GPIO output
pub struct DigitalOutput {
    pin: Output<'static>,
}

impl DigitalOutput {
    /// Wrap a configured embassy-rp output pin
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for DigitalOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
