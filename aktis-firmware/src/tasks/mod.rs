//! Firmware tasks

mod poll;

pub use poll::poll_task;
