//! Host-testable library interface for prodtimer.
//!
//! Everything with real logic lives here: the measurement state machine,
//! per-button debouncing, the batch average and the indicator policy, and
//! the status screen layout. None of it touches hardware, so it builds for
//! the host and the target alike.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and links this library for its logic.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod dispatch;
pub mod timer;

pub mod input {
    pub mod debounce;
}

// ═══════════════════════════════════════════════════════════════════════════
// UI Module Re-exports
// ═══════════════════════════════════════════════════════════════════════════

// The rest of src/ui/ drives hardware and belongs to the binary.
#[path = "ui/status.rs"]
mod ui_status_impl;

pub mod ui {
    use crate::timer::Event;

    /// Physical buttons on the device.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum Button {
        /// Start/stop a measurement.
        A,
        /// Pause/resume the device.
        B,
    }

    impl Button {
        pub const COUNT: usize = 2;

        pub const fn index(self) -> usize {
            match self {
                Button::A => 0,
                Button::B => 1,
            }
        }

        /// State-machine event produced by an admitted press.
        pub const fn event(self) -> Event {
            match self {
                Button::A => Event::PressA,
                Button::B => Event::PressB,
            }
        }
    }

    /// A raw falling edge, stamped with the millisecond clock.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Edge {
        pub button: Button,
        pub at_ms: u32,
    }

    impl Edge {
        pub const fn new(button: Button, at_ms: u32) -> Self {
            Self { button, at_ms }
        }
    }

    pub mod status {
        pub use crate::ui_status_impl::*;
    }
}

pub use dispatch::{Dispatch, ProductionTimer};
pub use timer::{Event, Indicator, Mode, StatusSnapshot, TimerState};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::input::debounce::Debouncer;
    use super::timer::indicator::duty_count;
    use super::timer::SampleBatch;
    use super::ui::status::{mode_label, status_lines, TITLE};
    use super::ui::{Button, Edge};
    use super::*;

    // ════════════════════════════════════════════════════════════════════════
    // Debouncer Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn debounce_first_edge_is_admitted() {
        let mut guard = Debouncer::new();
        assert!(guard.admit(Button::A, 0));
        assert_eq!(guard.last_accepted(Button::A), Some(0));
    }

    #[test]
    fn debounce_rejects_edges_inside_window() {
        let mut guard = Debouncer::new();
        assert!(guard.admit(Button::A, 1_000));
        assert!(!guard.admit(Button::A, 1_001));
        assert!(!guard.admit(Button::A, 1_199));
        // Rejected edges do not extend the window.
        assert_eq!(guard.last_accepted(Button::A), Some(1_000));
    }

    #[test]
    fn debounce_window_edge_is_inclusive() {
        let mut guard = Debouncer::new();
        assert!(guard.admit(Button::A, 1_000));
        assert!(guard.admit(Button::A, 1_200));
        assert!(!guard.admit(Button::A, 1_399));
        assert!(guard.admit(Button::A, 1_400));
    }

    #[test]
    fn debounce_buttons_have_independent_windows() {
        let mut guard = Debouncer::new();
        assert!(guard.admit(Button::A, 500));
        // A press on B right after A is not suppressed.
        assert!(guard.admit(Button::B, 510));
        assert!(!guard.admit(Button::A, 520));
        assert!(!guard.admit(Button::B, 530));
    }

    #[test]
    fn debounce_survives_clock_wrap() {
        let mut guard = Debouncer::new();
        assert!(guard.admit(Button::A, u32::MAX - 50));
        // 100 ms later, after the wrap.
        assert!(!guard.admit(Button::A, 49));
        // 250 ms later.
        assert!(guard.admit(Button::A, 199));
    }

    #[test]
    fn debounce_custom_window() {
        let mut guard = Debouncer::with_window(50);
        assert!(guard.admit(Button::B, 0));
        assert!(!guard.admit(Button::B, 49));
        assert!(guard.admit(Button::B, 50));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Sample Batch Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn batch_empty_mean_is_zero() {
        let batch = SampleBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.mean(), 0.0);
        assert_eq!(SampleBatch::capacity(), config::MAX_SAMPLES);
    }

    #[test]
    fn batch_mean_is_recomputed_from_contents() {
        let mut batch = SampleBatch::new();
        let first = batch.push(100);
        assert_eq!(first.average, 100.0);
        assert_eq!(first.samples_in_average, 1);

        let second = batch.push(200);
        assert_eq!(second.average, 150.0);
        assert_eq!(second.samples_in_average, 2);

        let third = batch.push(60);
        assert_eq!(third.average, 120.0);
        assert_eq!(batch.as_slice(), &[100, 200, 60]);
    }

    #[test]
    fn batch_closes_on_tenth_sample() {
        let mut batch = SampleBatch::new();
        for i in 1..=9u32 {
            let appended = batch.push(i * 10);
            assert!(!appended.batch_closed);
        }
        assert_eq!(batch.len(), 9);

        let tenth = batch.push(100);
        assert!(tenth.batch_closed);
        assert_eq!(tenth.samples_in_average, 10);
        assert_eq!(tenth.average, 55.0);
        assert!(batch.is_empty());
    }

    #[test]
    fn batch_after_close_starts_fresh() {
        let mut batch = SampleBatch::new();
        for _ in 0..10 {
            batch.push(1_000);
        }
        let next = batch.push(10);
        assert_eq!(next.average, 10.0);
        assert_eq!(next.samples_in_average, 1);
        assert_eq!(batch.as_slice(), &[10]);
    }

    #[test]
    fn batch_sum_does_not_overflow() {
        let mut batch = SampleBatch::new();
        batch.push(u32::MAX);
        let appended = batch.push(u32::MAX);
        assert_eq!(appended.average, u32::MAX as f32);
    }

    #[test]
    fn batch_clear_empties_buffer() {
        let mut batch = SampleBatch::new();
        batch.push(5);
        batch.push(7);
        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.mean(), 0.0);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Indicator Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn indicator_tolerance_band() {
        assert_eq!(Indicator::classify(85, 100.0, 5), Indicator::Better);
        assert_eq!(Indicator::classify(100, 100.0, 5), Indicator::Nominal);
        assert_eq!(Indicator::classify(115, 100.0, 5), Indicator::Worse);
    }

    #[test]
    fn indicator_band_edges_are_nominal() {
        assert_eq!(Indicator::classify(90, 100.0, 2), Indicator::Nominal);
        assert_eq!(Indicator::classify(110, 100.0, 2), Indicator::Nominal);
        assert_eq!(Indicator::classify(89, 100.0, 2), Indicator::Better);
        assert_eq!(Indicator::classify(111, 100.0, 2), Indicator::Worse);
    }

    #[test]
    fn indicator_off_without_enough_samples() {
        assert_eq!(Indicator::classify(10, 100.0, 0), Indicator::Off);
        assert_eq!(Indicator::classify(10, 100.0, 1), Indicator::Off);
        assert_eq!(Indicator::classify(10, 0.0, 5), Indicator::Off);
    }

    #[test]
    fn indicator_lights_one_channel() {
        assert_eq!(Indicator::Off.duties(), [0.0, 0.0, 0.0]);
        assert_eq!(Indicator::Better.duties(), [0.0, 1.0, 0.0]);
        assert_eq!(Indicator::Worse.duties(), [1.0, 0.0, 0.0]);
        assert_eq!(Indicator::Nominal.duties(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn indicator_duty_counts_scale_to_pwm_top() {
        assert_eq!(
            Indicator::Nominal.duty_counts(config::PWM_MAX_DUTY),
            [0, 0, 255]
        );
        assert_eq!(duty_count(0.5, 255), 127);
        assert_eq!(duty_count(2.0, 255), 255);
        assert_eq!(duty_count(-1.0, 255), 0);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Status Screen Tests
    // ════════════════════════════════════════════════════════════════════════

    fn snapshot(mode: Mode, paused: bool) -> StatusSnapshot {
        StatusSnapshot {
            mode,
            paused,
            elapsed_ms: None,
            sample_count: 0,
            average: 0.0,
        }
    }

    #[test]
    fn status_labels() {
        assert_eq!(mode_label(&snapshot(Mode::Idle, false)), "READY");
        assert_eq!(mode_label(&snapshot(Mode::Measuring, false)), "MEASURING");
        assert_eq!(mode_label(&snapshot(Mode::Paused, true)), "PAUSED");
    }

    #[test]
    fn status_idle_without_data() {
        let lines = status_lines(&snapshot(Mode::Idle, false));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text.as_str(), TITLE);
        assert_eq!((lines[0].x, lines[0].y), (10, 0));
        assert_eq!(lines[1].text.as_str(), "READY");
        assert_eq!(lines[1].y, 16);
        assert_eq!(lines[2].text.as_str(), "Count: 0/10");
        assert_eq!(lines[2].y, 48);
    }

    #[test]
    fn status_measuring_shows_elapsed_and_average() {
        let status = StatusSnapshot {
            mode: Mode::Measuring,
            paused: false,
            elapsed_ms: Some(1234),
            sample_count: 3,
            average: 512.3,
        };
        let lines = status_lines(&status);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2].text.as_str(), "Time: 1234 ms");
        assert_eq!(lines[2].y, 32);
        assert_eq!(lines[3].text.as_str(), "Count: 3/10");
        assert_eq!(lines[4].text.as_str(), "Avg: 512.3 ms");
        assert_eq!(lines[4].y, 56);
    }

    #[test]
    fn status_paused_hides_elapsed() {
        let status = StatusSnapshot {
            mode: Mode::Paused,
            paused: true,
            elapsed_ms: Some(99),
            sample_count: 4,
            average: 80.0,
        };
        let lines = status_lines(&status);
        assert!(lines.iter().all(|l| !l.text.starts_with("Time")));
        assert_eq!(lines[1].text.as_str(), "PAUSED");
        assert_eq!(lines.last().unwrap().text.as_str(), "Avg: 80.0 ms");
    }

    // ════════════════════════════════════════════════════════════════════════
    // Dispatch Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn dispatch_bounced_edge_changes_nothing() {
        let mut timer = ProductionTimer::new();
        assert!(timer.handle_edge(Edge::new(Button::A, 1_000)).is_applied());
        assert_eq!(timer.state().mode(), Mode::Measuring);

        let before = timer.state().clone();
        assert_eq!(
            timer.handle_edge(Edge::new(Button::A, 1_150)),
            Dispatch::Bounced
        );
        assert_eq!(timer.state(), &before);
    }

    #[test]
    fn dispatch_pause_not_blocked_by_recent_start() {
        let mut timer = ProductionTimer::new();
        timer.handle_edge(Edge::new(Button::A, 1_000));
        let dispatch = timer.handle_edge(Edge::new(Button::B, 1_050));
        assert!(dispatch.is_applied());
        assert_eq!(timer.state().mode(), Mode::Paused);
        assert!(timer.state().is_paused());
    }

    #[test]
    fn dispatch_uses_edge_timestamp() {
        let mut timer = ProductionTimer::new();
        timer.handle_edge(Edge::new(Button::A, 2_000));
        let snap = timer.snapshot(2_450);
        assert_eq!(snap.elapsed_ms, Some(450));
        match timer.handle_edge(Edge::new(Button::A, 2_700)) {
            Dispatch::Applied(effects) => {
                let m = effects.measurement.expect("measurement closed");
                assert_eq!(m.elapsed_ms, 700);
            }
            Dispatch::Bounced => panic!("edge should be admitted"),
        }
    }
}
