//! Frame renderer.
//!
//! Turns a [`Frame`](crate::Frame) into text. The renderer knows nothing about
//! terminals; it writes plain lines into any [`std::io::Write`] sink.
//!
//! ```text
//! ┏━━━━━━━━━━┓   ← top border
//! ┃          ┃   ← interior row 0 (blank)
//! ┃   test   ┃   ← interior row 1 (centered entry)
//! ┃          ┃
//! ┃          ┃
//! ┗━━━━━━━━━━┛   ← bottom border
//! ```

pub mod border;
pub mod stream;

pub use border::{bottom_border, interior_row, top_border};
pub use stream::{render, render_to_string};
