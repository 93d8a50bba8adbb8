//! Streaming a frame to a sink.
//!
//! The frame is written line by line: top border, `height` interior rows in
//! ascending order, bottom border. Each line is composed into one reusable
//! buffer and then handed to the sink followed by `\n`.
//!
//! A failing write aborts immediately. Lines already written stay written;
//! nothing is buffered or rolled back.

use std::io::Write;

use tracing::{debug, trace};

use super::border::{bottom_border_into, interior_row_into, top_border_into};
use crate::error::Result;
use crate::frame::Frame;

/// Render `frame` into `sink` as `height + 2` newline-terminated lines.
///
/// Rendering only reads the frame, so repeated calls on an unchanged frame
/// produce identical output.
pub fn render<W: Write + ?Sized>(frame: &Frame, sink: &mut W) -> Result<()> {
    let spec = frame.spec();
    let style = frame.style();
    let content = frame.content();
    let width = spec.width();

    debug!(
        height = spec.height(),
        width,
        entries = content.len(),
        "rendering frame"
    );

    let mut line = String::with_capacity(spec.outer_width() * style.horizontal().len());

    top_border_into(&mut line, style, width);
    emit(sink, &mut line, 0)?;

    for row in 0..spec.height() {
        interior_row_into(&mut line, style, width, content.get(row));
        emit(sink, &mut line, row + 1)?;
    }

    bottom_border_into(&mut line, style, width);
    emit(sink, &mut line, spec.outer_height() - 1)?;

    sink.flush()?;
    Ok(())
}

/// Render `frame` into a `String`.
pub fn render_to_string(frame: &Frame) -> Result<String> {
    let spec = frame.spec();
    let mut out = Vec::with_capacity(spec.outer_height() * spec.outer_width() * 3);
    render(frame, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn emit<W: Write + ?Sized>(sink: &mut W, line: &mut String, index: usize) -> Result<()> {
    trace!(index, line = %line, "emit");
    sink.write_all(line.as_bytes())?;
    sink.write_all(b"\n")?;
    line.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Alignment;

    #[test]
    fn test_render_to_string_line_count() {
        let mut frame = Frame::new(3, 5).unwrap();
        frame.place(1, "mid", Alignment::Center).unwrap();

        let out = render_to_string(&frame).unwrap();
        assert_eq!(out.lines().count(), 5);
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().nth(2), Some("┃ mid ┃"));
    }

    #[test]
    fn test_rejected_line_break_keeps_line_count() {
        let mut frame = Frame::new(4, 10).unwrap();
        assert!(frame.place(1, "ab\ncd", Alignment::Center).is_err());

        let out = render_to_string(&frame).unwrap();
        assert_eq!(out.lines().count(), frame.spec().outer_height());
    }
}
