//! Edge-to-state dispatch: the single writer of the timer state.
//!
//! Raw edges go through the per-button debouncer; admitted ones become
//! state-machine events. The firmware keeps one [`ProductionTimer`] behind a
//! mutex so only one edge is applied at a time.

use crate::input::debounce::Debouncer;
use crate::timer::{Effects, StatusSnapshot, TimerState};
use crate::ui::Edge;

/// Outcome of feeding one raw edge to the timer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// The edge fell inside the debounce window of its button.
    Bounced,
    /// The edge was admitted and applied; the screen must be re-rendered.
    Applied(Effects),
}

impl Dispatch {
    pub fn is_applied(&self) -> bool {
        matches!(self, Dispatch::Applied(_))
    }
}

/// Debouncer and state machine owned together.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductionTimer {
    debouncer: Debouncer,
    state: TimerState,
}

impl ProductionTimer {
    pub const fn new() -> Self {
        Self {
            debouncer: Debouncer::new(),
            state: TimerState::new(),
        }
    }

    pub const fn with_debouncer(debouncer: Debouncer) -> Self {
        Self {
            debouncer,
            state: TimerState::new(),
        }
    }

    /// Debounce `edge` and, if admitted, apply it at the edge's own timestamp.
    pub fn handle_edge(&mut self, edge: Edge) -> Dispatch {
        if !self.debouncer.admit(edge.button, edge.at_ms) {
            return Dispatch::Bounced;
        }
        Dispatch::Applied(self.state.apply(edge.button.event(), edge.at_ms))
    }

    pub fn snapshot(&self, now_ms: u32) -> StatusSnapshot {
        self.state.snapshot(now_ms)
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }
}

impl Default for ProductionTimer {
    fn default() -> Self {
        Self::new()
    }
}
