//! RP2040 implementations of the Aktis HAL traits
//!
//! Wraps the embassy-rp blocking GPIO, ADC and UART drivers behind the
//! traits defined in `aktis-hal`, and carries the Raspberry Pi Pico
//! board constants (on-board LED, analog header mapping).

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod board;
pub mod gpio;
pub mod serial;

pub use adc::AdcInput;
pub use gpio::{DigitalInput, DigitalOutput};
pub use serial::SerialPort;
