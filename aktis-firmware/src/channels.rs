//! Inter-task signals

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use aktis_core::poller::PollReport;

/// Latest completed poll, consumed by the main-task heartbeat log
pub static LATEST_REPORT: Signal<CriticalSectionRawMutex, PollReport> = Signal::new();
