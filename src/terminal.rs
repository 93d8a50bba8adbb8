//! Terminal output.
//!
//! Renders frames to the process's stdout and checks them against the real
//! terminal size reported by crossterm.

use std::io;

use tracing::warn;

use crate::error::Result;
use crate::frame::Frame;

/// Query the terminal size as `(columns, rows)`.
///
/// Returns `None` when stdout is not attached to a terminal.
pub fn detect_terminal_size() -> Option<(u16, u16)> {
    crossterm::terminal::size().ok()
}

/// Check if the frame, borders included, fits into `columns` x `rows`.
pub fn fits_terminal(frame: &Frame, columns: u16, rows: u16) -> bool {
    let spec = frame.spec();
    spec.outer_width() <= usize::from(columns) && spec.outer_height() <= usize::from(rows)
}

/// Render `frame` to stdout and flush.
///
/// A frame larger than the terminal is still printed; the terminal will wrap
/// or scroll it, and a warning is logged.
pub fn print_frame(frame: &Frame) -> Result<()> {
    if let Some((columns, rows)) = detect_terminal_size()
        && !fits_terminal(frame, columns, rows)
    {
        warn!(
            frame_width = frame.spec().outer_width(),
            frame_height = frame.spec().outer_height(),
            columns,
            rows,
            "frame does not fit the terminal"
        );
    }

    let mut stdout = io::stdout().lock();
    frame.render(&mut stdout)
}

// =============================================================================
// Tests
// =============================================================================
