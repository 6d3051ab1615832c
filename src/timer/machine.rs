//! Idle / Measuring / Paused state machine.
//!
//! The machine is driven by already-debounced presses and the current
//! millisecond clock. It never touches hardware: every call returns the
//! [`Effects`] the caller has to apply (indicator colour), and the caller
//! re-renders the status screen after each processed event.

use super::indicator::Indicator;
use super::samples::SampleBatch;

/// Operating mode of the timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    #[default]
    Idle,
    Measuring,
    Paused,
}

/// A debounced button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Start/stop button.
    PressA,
    /// Pause/resume button.
    PressB,
}

/// A completed measurement and the batch statistics it produced.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    pub elapsed_ms: u32,
    pub average: f32,
    pub samples_in_average: usize,
    pub batch_closed: bool,
    pub indicator: Indicator,
}

/// What the caller must do after an event was applied.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Effects {
    /// New indicator colour, when it changes.
    pub indicator: Option<Indicator>,
    /// Set when the event closed a measurement.
    pub measurement: Option<Measurement>,
}

/// Read-only view of the state used for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    pub mode: Mode,
    pub paused: bool,
    /// Time since the measurement started; only while measuring.
    pub elapsed_ms: Option<u32>,
    pub sample_count: usize,
    /// 0 until the first measurement completes.
    pub average: f32,
}

/// The complete measurement state of the device.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerState {
    mode: Mode,
    measurement_start: u32,
    samples: SampleBatch,
    running_average: f32,
    paused: bool,
}

impl TimerState {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Idle,
            measurement_start: 0,
            samples: SampleBatch::new(),
            running_average: 0.0,
            paused: false,
        }
    }

    /// Apply one debounced event at clock value `now_ms`.
    pub fn apply(&mut self, event: Event, now_ms: u32) -> Effects {
        match event {
            Event::PressB => self.toggle_pause(),
            Event::PressA => self.press_start_stop(now_ms),
        }
    }

    fn toggle_pause(&mut self) -> Effects {
        self.paused = !self.paused;
        if self.paused {
            // An open measurement is abandoned, not recorded.
            self.mode = Mode::Paused;
            Effects {
                indicator: Some(Indicator::Off),
                measurement: None,
            }
        } else {
            self.mode = Mode::Idle;
            Effects::default()
        }
    }

    fn press_start_stop(&mut self, now_ms: u32) -> Effects {
        match self.mode {
            Mode::Paused => Effects::default(),
            Mode::Idle => {
                self.measurement_start = now_ms;
                self.mode = Mode::Measuring;
                Effects::default()
            }
            Mode::Measuring => {
                let elapsed_ms = now_ms.wrapping_sub(self.measurement_start);
                let appended = self.samples.push(elapsed_ms);
                self.running_average = appended.average;
                self.mode = Mode::Idle;

                let indicator =
                    Indicator::classify(elapsed_ms, appended.average, appended.samples_in_average);
                Effects {
                    indicator: Some(indicator),
                    measurement: Some(Measurement {
                        elapsed_ms,
                        average: appended.average,
                        samples_in_average: appended.samples_in_average,
                        batch_closed: appended.batch_closed,
                        indicator,
                    }),
                }
            }
        }
    }

    /// Capture what the status screen shows at clock value `now_ms`.
    pub fn snapshot(&self, now_ms: u32) -> StatusSnapshot {
        let elapsed_ms = if self.is_measuring() {
            Some(now_ms.wrapping_sub(self.measurement_start))
        } else {
            None
        };
        StatusSnapshot {
            mode: self.mode,
            paused: self.paused,
            elapsed_ms,
            sample_count: self.samples.len(),
            average: self.running_average,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// A measurement is running and should be refreshed on screen.
    pub fn is_measuring(&self) -> bool {
        self.mode == Mode::Measuring && !self.paused
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[u32] {
        self.samples.as_slice()
    }

    pub fn running_average(&self) -> f32 {
        self.running_average
    }

    /// Start of the open measurement, if one is running.
    pub fn measurement_start(&self) -> Option<u32> {
        (self.mode == Mode::Measuring).then_some(self.measurement_start)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure transition: `(state, event, now) -> (state', effects)`.
pub fn transition(mut state: TimerState, event: Event, now_ms: u32) -> (TimerState, Effects) {
    let effects = state.apply(event, now_ms);
    (state, effects)
}
