//! prodtimer firmware entry point (nRF52840).
//!
//! Task layout:
//!
//! - `button_task` ×2 - timestamp raw falling edges, queue them in arrival order
//! - `dispatch_task`  - sole writer of the timer: debounce, apply, drive the LED
//! - `refresh_task`   - 100 ms tick that re-renders while a measurement runs
//! - `display_task`   - owns the SSD1306; renders a snapshot on each request

#![no_std]
#![no_main]

mod clock;
mod error;
mod led;
mod ui;

use defmt::{debug, info, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_nrf::peripherals;
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::bind_interrupts;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use panic_probe as _;
use prodtimer::config::{DISPLAY_REFRESH_MS, EDGE_QUEUE_DEPTH};
use prodtimer::ui::{Button, Edge};
use prodtimer::{Dispatch, ProductionTimer};

use crate::led::RgbIndicator;
use crate::ui::buttons::button_task;
use crate::ui::display::{self, Display};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Debouncer + state machine. Written only by `dispatch_task`.
static TIMER: Mutex<CriticalSectionRawMutex, ProductionTimer> =
    Mutex::new(ProductionTimer::new());

/// Raw edges from both buttons, in arrival order.
static EDGES: Channel<CriticalSectionRawMutex, Edge, EDGE_QUEUE_DEPTH> = Channel::new();

/// Render request for `display_task`; repeated requests coalesce.
static RENDER: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("prodtimer starting");
    let p = embassy_nrf::init(Default::default());

    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);
    let display = display::init(i2c);

    let pwm = SimplePwm::new_3ch(p.PWM0, p.P0_13, p.P0_14, p.P0_15);
    let indicator = RgbIndicator::new(pwm);

    unwrap!(spawner.spawn(display_task(display)));
    unwrap!(spawner.spawn(dispatch_task(indicator)));
    unwrap!(spawner.spawn(refresh_task()));
    unwrap!(spawner.spawn(button_task(
        p.P0_11.degrade(),
        Button::A,
        EDGES.sender()
    )));
    unwrap!(spawner.spawn(button_task(
        p.P0_12.degrade(),
        Button::B,
        EDGES.sender()
    )));

    RENDER.signal(());
    info!("prodtimer ready");
}

/// Apply queued edges one at a time.
#[embassy_executor::task]
async fn dispatch_task(mut indicator: RgbIndicator) -> ! {
    let rx = EDGES.receiver();

    loop {
        let edge = rx.receive().await;

        let (dispatch, paused) = {
            let mut timer = TIMER.lock().await;
            let dispatch = timer.handle_edge(edge);
            (dispatch, timer.state().is_paused())
        };

        let effects = match dispatch {
            Dispatch::Bounced => {
                debug!("Button {}: bounce at {} ms", edge.button, edge.at_ms);
                continue;
            }
            Dispatch::Applied(effects) => effects,
        };

        info!("Button {} at {} ms", edge.button, edge.at_ms);

        if edge.button == Button::B {
            if paused {
                info!("Paused");
            } else {
                info!("Resumed");
            }
        }

        if let Some(m) = effects.measurement {
            info!(
                "Measurement: {} ms, avg {} ms over {} samples -> {}",
                m.elapsed_ms, m.average, m.samples_in_average, m.indicator
            );
            if m.batch_closed {
                info!("Batch closed, sample buffer cleared");
            }
        }

        if let Some(class) = effects.indicator {
            indicator.show(class);
        }

        RENDER.signal(());
    }
}

/// Keep the elapsed time on screen moving while measuring.
#[embassy_executor::task]
async fn refresh_task() -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(DISPLAY_REFRESH_MS));

    loop {
        ticker.next().await;
        let measuring = TIMER.lock().await.state().is_measuring();
        if measuring {
            RENDER.signal(());
        }
    }
}

/// Sole owner of the display; only ever reads the timer.
#[embassy_executor::task]
async fn display_task(mut display: Display<Twim<'static, peripherals::TWISPI0>>) -> ! {
    loop {
        RENDER.wait().await;
        let status = TIMER.lock().await.snapshot(clock::now_ms());
        if let Err(e) = display::draw_status(&mut display, &status) {
            warn!("Display: {}", e);
        }
    }
}
