//! Serial report line formatting
//!
//! The report channel only ever carries two line shapes: the decimal
//! text of an analog reading, and the detection marker. Both are
//! CRLF-terminated ASCII.

use core::fmt::Write;

use heapless::String;

/// Detection marker line
pub const DETECTED_LINE: &str = "Object detected!\r\n";

/// Longest line the channel emits (the marker line, 18 bytes)
pub const MAX_LINE_LEN: usize = DETECTED_LINE.len();

/// Format an analog reading as a CRLF-terminated decimal line
pub fn reading_line(level: u16) -> String<MAX_LINE_LEN> {
    let mut line = String::new();
    // "65535\r\n" is 7 bytes, always fits
    let _ = write!(line, "{}\r\n", level);
    line
}
