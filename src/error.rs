//! Unified error type for the prodtimer firmware.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Nothing in the measurement core can fail; these are peripheral-side
//! failures that are logged and otherwise ignored.

use defmt::Format;

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Error {
    /// I²C transaction to the display failed.
    Display,

    /// The edge queue to the dispatch task was full; the edge was dropped.
    EdgeQueueFull,
}
