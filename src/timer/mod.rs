//! Measurement core: sample batches, indicator policy and the mode state machine.

pub mod indicator;
pub mod machine;
pub mod samples;


pub use indicator::Indicator;
pub use machine::{transition, Effects, Event, Measurement, Mode, StatusSnapshot, TimerState};
pub use samples::{Appended, SampleBatch};
