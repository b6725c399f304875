//! Gate polling task
//!
//! Owns the poll cadence and runs one poll-and-report iteration per
//! tick. Faults are logged and skipped; the hardware is polled again on
//! the next tick with no retry in between.

use defmt::*;
use embassy_time::{Duration, Ticker};

use aktis_core::config::PollerConfig;
use aktis_core::poller::Poller;
use aktis_hal_rp2040::adc::AdcInput;
use aktis_hal_rp2040::gpio::{DigitalInput, DigitalOutput};
use aktis_hal_rp2040::serial::SerialPort;

use crate::channels::LATEST_REPORT;

/// Poll task - one read/report/indicate iteration per tick
#[embassy_executor::task]
pub async fn poll_task(
    gate: DigitalInput,
    mut level: AdcInput,
    mut indicator: DigitalOutput,
    mut serial: SerialPort,
    config: PollerConfig,
) {
    info!("Poll task started ({} ms interval)", config.poll_interval_ms);

    let poller = Poller::new(&config);
    let mut ticker = Ticker::every(Duration::from_millis(config.poll_interval_ms as u64));

    loop {
        match poller.poll(&gate, &mut level, &mut indicator, &mut serial) {
            Ok(report) => {
                trace!(
                    "Level {} (gate {}, detected {})",
                    report.level,
                    report.gate_high,
                    report.detected
                );
                if report.detected {
                    debug!("Object detected at level {}", report.level);
                }
                LATEST_REPORT.signal(report);
            }
            Err(e) => warn!("Poll iteration failed: {:?}", e),
        }

        ticker.next().await;
    }
}
