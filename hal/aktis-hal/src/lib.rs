//! Aktis Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. This keeps the gate polling logic in
//! `aktis-core` board-agnostic and testable on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (aktis-firmware)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  aktis-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  aktis-hal-rp2040                       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`], [`gpio::OutputPin`] - Digital I/O
//! - [`adc::AdcChannel`] - Analog level reads
//! - [`serial::SerialTx`] - Line-oriented serial reporting

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod serial;

// Re-export key traits at crate root for convenience
pub use adc::AdcChannel;
pub use gpio::{InputPin, OutputPin};
pub use serial::{SerialConfig, SerialTx};
