//! Status screen layout.
//!
//! Turns a [`StatusSnapshot`] into positioned text lines. The display driver
//! only clears, draws each line with its top-left corner at `(x, y)`, and
//! flushes.

use core::fmt::Write;

use crate::config::MAX_SAMPLES;
use crate::timer::{Mode, StatusSnapshot};
use heapless::{String, Vec};

/// Longest line the screen layout produces.
pub const LINE_CAPACITY: usize = 24;

/// Maximum number of lines on the status screen.
pub const MAX_LINES: usize = 5;

pub const TITLE: &str = "Production Timer";

const LEFT_MARGIN: i32 = 10;
const TITLE_Y: i32 = 0;
const MODE_Y: i32 = 16;
const TIME_Y: i32 = 32;
const COUNT_Y: i32 = 48;
const AVERAGE_Y: i32 = 56;

/// One line of text and where its top-left corner goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String<LINE_CAPACITY>,
    pub x: i32,
    pub y: i32,
}

impl StatusLine {
    fn new(text: &str, y: i32) -> Self {
        let mut line = String::new();
        let _ = line.push_str(text);
        Self {
            text: line,
            x: LEFT_MARGIN,
            y,
        }
    }

    fn formatted(args: core::fmt::Arguments<'_>, y: i32) -> Self {
        let mut line: String<LINE_CAPACITY> = String::new();
        let _ = line.write_fmt(args);
        Self {
            text: line,
            x: LEFT_MARGIN,
            y,
        }
    }
}

/// Mode label; pause wins over the stored mode.
pub fn mode_label(status: &StatusSnapshot) -> &'static str {
    if status.paused {
        "PAUSED"
    } else if status.mode == Mode::Measuring {
        "MEASURING"
    } else {
        "READY"
    }
}

/// Lay out the full status screen.
pub fn status_lines(status: &StatusSnapshot) -> Vec<StatusLine, MAX_LINES> {
    let mut lines = Vec::new();

    let _ = lines.push(StatusLine::new(TITLE, TITLE_Y));
    let _ = lines.push(StatusLine::new(mode_label(status), MODE_Y));

    if !status.paused {
        if let Some(elapsed) = status.elapsed_ms {
            let _ = lines.push(StatusLine::formatted(
                format_args!("Time: {} ms", elapsed),
                TIME_Y,
            ));
        }
    }

    let _ = lines.push(StatusLine::formatted(
        format_args!("Count: {}/{}", status.sample_count, MAX_SAMPLES),
        COUNT_Y,
    ));

    if status.average > 0.0 {
        let _ = lines.push(StatusLine::formatted(
            format_args!("Avg: {:.1} ms", status.average),
            AVERAGE_Y,
        ));
    }

    lines
}
