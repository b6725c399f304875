//! Raspberry Pi Pico board constants
//!
//! Pin numbers here are Pico-specific; other RP2040 boards route the
//! analog header differently.

/// First GPIO with ADC capability (ADC0)
pub const ADC_GPIO_BASE: u8 = 26;

/// Number of externally wired ADC channels (A0..A3)
pub const ADC_CHANNEL_COUNT: u8 = 4;

/// Map an analog header channel ("A2" -> 2) to its GPIO number
///
/// Returns `None` for channels the Pico does not route to the header.
pub fn analog_channel_gpio(channel: u8) -> Option<u8> {
    if channel < ADC_CHANNEL_COUNT {
        Some(ADC_GPIO_BASE + channel)
    } else {
        None
    }
}
