//! Aktis - Optical Gate Poller Firmware
//!
//! Main firmware binary for RP2040-based gate detector boards. Polls a
//! beam-break sensor and an analog level input, reports readings over
//! UART and drives the on-board LED while the level is at or below the
//! detection threshold.
//!
//! Named after the Greek "aktis" meaning "ray" - the firmware watches
//! a light beam and reports when something interrupts it.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::uart::UartTx;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use aktis_core::config::PollerConfig;
use aktis_hal::SerialConfig;
use aktis_hal_rp2040::adc::AdcInput;
use aktis_hal_rp2040::board;
use aktis_hal_rp2040::gpio::{DigitalInput, DigitalOutput};
use aktis_hal_rp2040::serial::{self, SerialPort};

mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Aktis firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Compiled-in settings; defaults preserve the original detector wiring
    let config = PollerConfig::default();

    // Beam-break sensor on gpio2. Bias is provided by the sensor board,
    // so no internal pull.
    let gate = DigitalInput::new(Input::new(p.PIN_2, Pull::None));
    info!("Gate sensor on gpio{}", config.detection_pin);

    // Detection indicator: on-board LED (gpio25 on the Pico), off at boot
    let indicator = DigitalOutput::new(Output::new(p.PIN_25, Level::Low));
    info!("Indicator on gpio{}", config.indicator_pin);

    // Analog level source on ADC2 = gpio28 ("A2" on the Pico header)
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let level = AdcInput::new(adc, Channel::new_pin(p.PIN_28, Pull::None));
    info!(
        "Analog level on ADC{} (gpio{})",
        config.level_channel,
        board::analog_channel_gpio(config.level_channel).unwrap_or(0)
    );

    // UART0 TX for the report channel; the link is output-only
    let serial_config = SerialConfig {
        baudrate: config.baud_rate,
    };
    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, serial::uart_config(&serial_config));
    let serial = SerialPort::new(tx);
    info!("UART initialized at {} baud", serial_config.baudrate);

    // Spawn the poll loop
    spawner
        .spawn(tasks::poll_task(gate, level, indicator, serial, config))
        .unwrap();

    info!("Poll task spawned, firmware running");

    // Main task has nothing else to do - all work happens in the poll task
    loop {
        Timer::after_secs(60).await;
        match channels::LATEST_REPORT.try_take() {
            Some(report) => trace!(
                "Heartbeat: level {} (detected: {})",
                report.level,
                report.detected
            ),
            None => trace!("Heartbeat: no poll completed yet"),
        }
    }
}
