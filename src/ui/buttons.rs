//! GPIO button input.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - A - start / stop a measurement
//!   - B - pause / resume the device
//!
//! Each button is handled by an async task that waits for a falling edge,
//! stamps it with the millisecond clock, and queues it for the dispatch
//! task. No debouncing happens here: every edge is forwarded and the
//! per-button debouncer in the dispatch path decides which ones count.

use crate::clock::now_ms;
use crate::error::Error;
use defmt::{trace, warn};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use prodtimer::config::EDGE_QUEUE_DEPTH;
use prodtimer::ui::{Button, Edge};

pub type EdgeSender = Sender<'static, CriticalSectionRawMutex, Edge, EDGE_QUEUE_DEPTH>;

/// Run a single button edge loop.
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(pin: AnyPin, button: Button, tx: EdgeSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        let edge = Edge::new(button, now_ms());
        trace!("Edge: {}", edge);
        if let Err(e) = queue_edge(&tx, edge) {
            warn!("Button {}: {}", button, e);
        }
    }
}

/// Queue without waiting so a slow consumer never stalls edge capture.
fn queue_edge(tx: &EdgeSender, edge: Edge) -> Result<(), Error> {
    tx.try_send(edge).map_err(|_| Error::EdgeQueueFull)
}
