//! Board-agnostic core logic for the Aktis gate poller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Poller configuration (named constants for the observed wiring)
//! - The poll-and-report sequence, generic over the HAL traits
//! - Serial report line formatting

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod math;
pub mod poller;
pub mod report;
