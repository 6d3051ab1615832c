//! Per-button refractory window for raw edge events.
//!
//! Mechanical buttons bounce for a few milliseconds after each press.
//! Every physical source keeps its own last-accepted timestamp so a press
//! on one button never suppresses a press on the other.

use crate::config::DEBOUNCE_MS;
use crate::ui::Button;

/// Debounce state for all buttons on the device.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    last_accepted: [Option<u32>; Button::COUNT],
    window_ms: u32,
}

impl Debouncer {
    /// Create a debouncer using the default [`DEBOUNCE_MS`] window.
    pub const fn new() -> Self {
        Self::with_window(DEBOUNCE_MS)
    }

    pub const fn with_window(window_ms: u32) -> Self {
        Self {
            last_accepted: [None; Button::COUNT],
            window_ms,
        }
    }

    /// Decide whether an edge from `source` at `event_ms` is a new press.
    ///
    /// The first edge of each source is always admitted. Later edges are
    /// admitted once at least the window has elapsed since the last admitted
    /// one. The clock wraps at 2^32, so the distance is a wrapping difference.
    /// Never blocks; safe to call from an edge handler.
    pub fn admit(&mut self, source: Button, event_ms: u32) -> bool {
        let slot = &mut self.last_accepted[source.index()];
        let admitted = match *slot {
            None => true,
            Some(last) => event_ms.wrapping_sub(last) >= self.window_ms,
        };
        if admitted {
            *slot = Some(event_ms);
        }
        admitted
    }

    /// Timestamp of the last admitted edge for `source`, if any.
    pub fn last_accepted(&self, source: Button) -> Option<u32> {
        self.last_accepted[source.index()]
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
