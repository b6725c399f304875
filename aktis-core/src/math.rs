//! Scratch arithmetic left over from board bring-up
//!
//! Nothing in the poll path calls this; it rode along from the first
//! sketch flashed on the board and is kept to match it.

/// Add two integers
pub fn add(x: i32, y: i32) -> i32 {
    x + y
}
