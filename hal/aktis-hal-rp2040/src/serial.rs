//! Serial transmitter implementation
//!
//! Blocking UART transmit for the report channel. Receive is unused by
//! the firmware, so only the TX half is wrapped.

use embassy_rp::uart::{Blocking, Config, Error, UartTx};

use aktis_hal::{SerialConfig, SerialTx};

/// Transmit-only serial port backed by an RP2040 UART
pub struct SerialPort {
    tx: UartTx<'static, Blocking>,
}

impl SerialPort {
    /// Wrap a configured embassy-rp UART transmitter
    pub fn new(tx: UartTx<'static, Blocking>) -> Self {
        Self { tx }
    }
}

impl SerialTx for SerialPort {
    type Error = Error;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Error> {
        self.tx.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.tx.blocking_flush()
    }
}

/// Build an embassy-rp UART config from the HAL serial settings
pub fn uart_config(cfg: &SerialConfig) -> Config {
    let mut out = Config::default();
    out.baudrate = cfg.baudrate;
    out
}
