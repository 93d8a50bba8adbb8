//! # spark-frame
//!
//! Bordered text frames for terminal output.
//!
//! A [`Frame`] is a rectangle of fixed interior height and width, drawn with
//! a configurable set of box-drawing glyphs. Text is placed on individual
//! interior rows with a left, center or right alignment, and the whole frame
//! is streamed line by line into any [`std::io::Write`] sink.
//!
//! ## Pipeline
//!
//! ```text
//! place(row, text, alignment) → ContentTable → render → pad rows → sink
//!                                                  ↑
//!                                               StyleSet
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (FrameSpec, Alignment, ContentEntry, BorderStyle)
//! - [`style`] - Immutable border glyph sets
//! - [`content`] - Row-indexed content store with placement validation
//! - [`layout`] - Text measurement and row padding
//! - [`renderer`] - Line composition and streaming
//! - [`terminal`] - Stdout output and terminal size checks
//!
//! ## Example
//!
//! ```ignore
//! use spark_frame::{Alignment, Frame};
//!
//! let mut frame = Frame::new(4, 10)?;
//! frame.place(1, "test", Alignment::Center)?;
//! print!("{}", frame.render_to_string()?);
//! // ┏━━━━━━━━━━┓
//! // ┃          ┃
//! // ┃   test   ┃
//! // ┃          ┃
//! // ┃          ┃
//! // ┗━━━━━━━━━━┛
//! ```

pub mod content;
pub mod error;
pub mod frame;
pub mod layout;
pub mod renderer;
pub mod style;
pub mod terminal;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use content::ContentTable;
pub use error::{FrameError, Result};
pub use frame::Frame;
pub use layout::{pad, text_width};
pub use renderer::{render, render_to_string};
pub use style::{DEFAULT_STYLE, GlyphRole, StyleBuilder, StyleSet};
pub use terminal::{detect_terminal_size, fits_terminal, print_frame};
