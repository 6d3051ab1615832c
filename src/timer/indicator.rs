//! Tolerance-band classification and RGB mapping for the indicator LED.

use crate::config::{AVERAGE_TOLERANCE, MIN_SAMPLES_FOR_INDICATOR};

/// What the RGB indicator shows after a completed measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    /// All channels dark.
    #[default]
    Off,
    /// Faster than the tolerance band (green).
    Better,
    /// Slower than the tolerance band (red).
    Worse,
    /// Inside the tolerance band, edges included (blue).
    Nominal,
}

impl Indicator {
    /// Classify `elapsed_ms` against `average` taken over `samples_in_average` values.
    ///
    /// Averages built from fewer than [`MIN_SAMPLES_FOR_INDICATOR`] samples,
    /// or an average of zero, give [`Indicator::Off`].
    pub fn classify(elapsed_ms: u32, average: f32, samples_in_average: usize) -> Self {
        if average == 0.0 || samples_in_average < MIN_SAMPLES_FOR_INDICATOR {
            return Indicator::Off;
        }

        let elapsed = elapsed_ms as f32;
        let lower = average * (1.0 - AVERAGE_TOLERANCE);
        let upper = average * (1.0 + AVERAGE_TOLERANCE);

        if elapsed < lower {
            Indicator::Better
        } else if elapsed > upper {
            Indicator::Worse
        } else {
            Indicator::Nominal
        }
    }

    /// Channel intensities as `[red, green, blue]` in `0.0..=1.0`.
    pub fn duties(self) -> [f32; 3] {
        match self {
            Indicator::Off => [0.0, 0.0, 0.0],
            Indicator::Better => [0.0, 1.0, 0.0],
            Indicator::Worse => [1.0, 0.0, 0.0],
            Indicator::Nominal => [0.0, 0.0, 1.0],
        }
    }

    /// Channel intensities scaled to PWM compare values with top `max_duty`.
    pub fn duty_counts(self, max_duty: u16) -> [u16; 3] {
        self.duties().map(|level| duty_count(level, max_duty))
    }
}

/// Scale an intensity in `0.0..=1.0` to a compare value; out-of-range input is clamped.
pub fn duty_count(level: f32, max_duty: u16) -> u16 {
    (level.clamp(0.0, 1.0) * max_duty as f32) as u16
}
