//! Error types for frame construction, placement and rendering.

use thiserror::Error;

/// Error type for every fallible frame operation.
#[derive(Error, Debug)]
pub enum FrameError {
    /// A placement targeted a row outside the frame interior.
    #[error("row {row} is outside the frame interior (height {height})")]
    RowOutOfRange {
        /// The requested row
        row: usize,
        /// The interior height
        height: usize,
    },

    /// Text is wider than the frame interior.
    #[error("text too long to fit into the frame: {len} received, can fit text of length {width}")]
    ContentTooWide {
        /// Length of the rejected text, in columns
        len: usize,
        /// The interior width
        width: usize,
    },

    /// Text contains a line break or other control character.
    #[error("text for row {row} contains control character {ch:?}")]
    ControlCharacter {
        /// The requested row
        row: usize,
        /// The first offending character
        ch: char,
    },

    /// A glyph set was incomplete or contained an unusable glyph.
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    /// An alignment value was not one of left, center or right.
    #[error("invalid alignment: {0:?}")]
    InvalidAlignment(String),

    /// Frame height or width was zero.
    #[error("invalid frame dimensions: height={height}, width={width}")]
    InvalidDimensions {
        /// The requested height
        height: usize,
        /// The requested width
        width: usize,
    },

    /// The output sink rejected a write.
    #[error("failed to write to sink: {0}")]
    SinkWriteFailure(#[from] std::io::Error),
}

/// Result type alias using [`FrameError`].
pub type Result<T> = std::result::Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = FrameError::RowOutOfRange { row: 7, height: 4 };
        assert_eq!(err.to_string(), "row 7 is outside the frame interior (height 4)");

        let err = FrameError::ContentTooWide { len: 12, width: 10 };
        assert!(err.to_string().contains("12 received"));

        let err = FrameError::InvalidAlignment("middle".into());
        assert_eq!(err.to_string(), "invalid alignment: \"middle\"");

        let err = FrameError::ControlCharacter { row: 1, ch: '\n' };
        assert_eq!(err.to_string(), "text for row 1 contains control character '\\n'");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: FrameError = io.into();
        assert!(matches!(err, FrameError::SinkWriteFailure(_)));
    }
}
