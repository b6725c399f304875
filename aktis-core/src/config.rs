//! Poller configuration
//!
//! All tunables of the gate poller in one place. The defaults preserve
//! the wiring and behavior of the original detector board; tests and
//! other boards substitute their own values.

/// Detection threshold default: a level at or below this fires detection
pub const DEFAULT_THRESHOLD: u16 = 50;

/// Poll cadence default in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1000;

/// Serial report rate default in baud
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Gate poller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollerConfig {
    /// Analog level at or below which detection fires (inclusive)
    pub threshold: u16,
    /// GPIO of the beam-break sensor
    pub detection_pin: u8,
    /// Analog header channel of the level source ("A2" -> 2)
    pub level_channel: u8,
    /// GPIO of the detection indicator (Pico on-board LED)
    pub indicator_pin: u8,
    /// Pause between poll iterations in milliseconds
    pub poll_interval_ms: u32,
    /// Serial report rate in baud
    pub baud_rate: u32,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            detection_pin: 2,
            level_channel: 2,
            indicator_pin: 25,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}
