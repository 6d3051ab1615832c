//! User interface subsystem - OLED status display + physical buttons.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, drawn from a `StatusSnapshot`
//! - **Buttons**: 2 tactile switches (A = start/stop, B = pause); raw edges
//!   are timestamped here and debounced by the dispatch task

pub mod buttons;
pub mod display;
