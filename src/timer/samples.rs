//! Fixed-capacity batch of measured durations.

use crate::config::MAX_SAMPLES;
use heapless::Vec;

/// Result of appending one duration to a [`SampleBatch`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Appended {
    /// Mean of the batch including the new sample.
    pub average: f32,
    /// Number of samples the mean was taken over.
    pub samples_in_average: usize,
    /// The append filled the batch and it was cleared afterwards.
    pub batch_closed: bool,
}

/// Up to [`MAX_SAMPLES`] durations (ms), oldest first.
///
/// Filling the last slot closes the batch: the mean is taken over all
/// [`MAX_SAMPLES`] values and the buffer is then emptied. Individual values
/// are not kept past that point.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleBatch {
    samples: Vec<u32, MAX_SAMPLES>,
}

impl SampleBatch {
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Append a duration, recompute the mean and close the batch if full.
    pub fn push(&mut self, duration_ms: u32) -> Appended {
        // Closing on the last slot keeps a free slot here.
        if self.samples.push(duration_ms).is_err() {
            self.clear();
            let _ = self.samples.push(duration_ms);
        }

        let average = self.mean();
        let samples_in_average = self.samples.len();
        let batch_closed = self.samples.is_full();
        if batch_closed {
            self.clear();
        }

        Appended {
            average,
            samples_in_average,
            batch_closed,
        }
    }

    /// Drop all samples of the current batch.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Arithmetic mean over the buffered samples; 0 when empty.
    pub fn mean(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.samples.iter().map(|&s| u64::from(s)).sum();
        sum as f32 / self.samples.len() as f32
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.samples
    }

    pub const fn capacity() -> usize {
        MAX_SAMPLES
    }
}

impl Default for SampleBatch {
    fn default() -> Self {
        Self::new()
    }
}
