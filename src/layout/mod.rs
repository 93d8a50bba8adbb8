//! Row layout.
//!
//! Measuring placed text and padding it to the frame's interior width.
//! Everything here is a pure function of its arguments.

pub mod align;
pub mod measure;

pub use align::{pad, pad_into, padding};
pub use measure::{fits, text_width};
