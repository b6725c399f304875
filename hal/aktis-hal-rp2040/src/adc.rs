//! ADC channel implementation
//!
//! Blocking reads through the RP2040's single ADC peripheral. The
//! peripheral and the channel are owned together; this firmware only
//! ever samples one analog input.

use embassy_rp::adc::{Adc, Blocking, Channel, Error};

use aktis_hal::AdcChannel;

/// Analog input backed by the RP2040 ADC
pub struct AdcInput {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl AdcInput {
    /// Pair the ADC peripheral with the channel to sample
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcChannel for AdcInput {
    type Error = Error;

    fn read(&mut self) -> Result<u16, Error> {
        self.adc.blocking_read(&mut self.channel)
    }
}
