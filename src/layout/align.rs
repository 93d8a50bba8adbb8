//! Row padding.
//!
//! [`pad`] turns a piece of text into an interior row of exactly `width`
//! columns. Left and right alignment put all padding on one side; center
//! splits it, with the odd column going to the right.

use super::measure::text_width;
use crate::types::Alignment;

/// Pad `text` to exactly `width` columns using `alignment`.
///
/// `text` must already fit (`text_width(text) <= width`). Callers go through
/// [`ContentTable::place`](crate::ContentTable::place), which guarantees it.
/// Text that does not fit is returned unpadded.
pub fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let mut out = String::with_capacity(text.len() + width);
    pad_into(&mut out, text, width, alignment);
    out
}

/// Append the padded row to `out` without allocating.
pub fn pad_into(out: &mut String, text: &str, width: usize, alignment: Alignment) {
    let (left, right) = padding(text_width(text), width, alignment);
    push_spaces(out, left);
    out.push_str(text);
    push_spaces(out, right);
}

/// Leading and trailing space counts for a text of `len` columns.
pub fn padding(len: usize, width: usize, alignment: Alignment) -> (usize, usize) {
    let free = width.saturating_sub(len);
    match alignment {
        Alignment::Left => (0, free),
        Alignment::Right => (free, 0),
        Alignment::Center => {
            let left = free / 2;
            (left, free - left)
        }
    }
}

#[inline]
pub(crate) fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}
