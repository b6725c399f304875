//! Analog input abstractions
//!
//! Provides a trait for blocking ADC reads that can be implemented by
//! chip-specific HALs.

/// Blocking ADC channel
///
/// Readings are raw converter counts; the range depends on the chip's
/// converter resolution (0-4095 on the RP2040's 12-bit ADC).
pub trait AdcChannel {
    /// Error type for conversion failures
    type Error;

    /// Perform one conversion and return the raw reading
    fn read(&mut self) -> Result<u16, Self::Error>;
}
