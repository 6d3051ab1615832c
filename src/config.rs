//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and measurement
//! policy constants live here so they can be tuned in one place.

// Measurement policy

/// Number of completed measurements that make up one batch. The sample
/// buffer is cleared after this many appends.
pub const MAX_SAMPLES: usize = 10;

/// Relative half-width of the tolerance band around the running average.
/// 0.1 = ±10 %.
pub const AVERAGE_TOLERANCE: f32 = 0.1;

/// Minimum number of samples behind an average before it is used to
/// classify a measurement.
pub const MIN_SAMPLES_FOR_INDICATOR: usize = 2;

// Input

/// Minimum spacing between two admitted presses of the same button (ms).
pub const DEBOUNCE_MS: u32 = 200;

/// Depth of the queue between the button tasks and the dispatch task.
pub const EDGE_QUEUE_DEPTH: usize = 8;

// Display

/// Period of the status refresh while a measurement is running (ms).
pub const DISPLAY_REFRESH_MS: u64 = 100;

/// SSD1306 7-bit I²C address.
pub const DISPLAY_I2C_ADDR: u8 = 0x3C;

// Indicator

/// PWM counter top; a duty of 1.0 maps to this value.
pub const PWM_MAX_DUTY: u16 = 255;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button A (start/stop) → P0.11
//   Button B (pause)      → P0.12
//   LED red               → P0.13
//   LED green             → P0.14
//   LED blue              → P0.15
//   I²C SDA               → P0.26
//   I²C SCL               → P0.27
