//! Millisecond clock shared by edge timestamps and the status screen.

use embassy_time::Instant;

/// Milliseconds since boot, truncated to 32 bits.
///
/// Wraps after ~49.7 days; every consumer takes wrapping differences.
pub fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}
