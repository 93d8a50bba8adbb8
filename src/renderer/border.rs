//! Line composition.
//!
//! Every rendered line is an edge glyph, `width` interior columns, and the
//! matching edge glyph. Borders fill the interior with the horizontal glyph;
//! interior rows fill it with padded content or blanks.

use crate::layout::align::{pad_into, push_spaces};
use crate::style::StyleSet;
use crate::types::ContentEntry;

/// `┏━━━┓` for a given interior width.
pub fn top_border(style: &StyleSet, width: usize) -> String {
    let mut line = String::new();
    top_border_into(&mut line, style, width);
    line
}

/// `┗━━━┛` for a given interior width.
pub fn bottom_border(style: &StyleSet, width: usize) -> String {
    let mut line = String::new();
    bottom_border_into(&mut line, style, width);
    line
}

/// `┃...┃` holding `entry`, or blank when the row is empty.
pub fn interior_row(style: &StyleSet, width: usize, entry: Option<&ContentEntry>) -> String {
    let mut line = String::new();
    interior_row_into(&mut line, style, width, entry);
    line
}

pub(crate) fn top_border_into(out: &mut String, style: &StyleSet, width: usize) {
    edge_into(out, style.top_left(), style.horizontal(), style.top_right(), width);
}

pub(crate) fn bottom_border_into(out: &mut String, style: &StyleSet, width: usize) {
    edge_into(out, style.bottom_left(), style.horizontal(), style.bottom_right(), width);
}

pub(crate) fn interior_row_into(
    out: &mut String,
    style: &StyleSet,
    width: usize,
    entry: Option<&ContentEntry>,
) {
    out.push_str(style.vertical());
    match entry {
        Some(entry) => pad_into(out, entry.text(), width, entry.alignment()),
        None => push_spaces(out, width),
    }
    out.push_str(style.vertical());
}

fn edge_into(out: &mut String, left: &str, fill: &str, right: &str, width: usize) {
    out.reserve(left.len() + fill.len() * width + right.len());
    out.push_str(left);
    for _ in 0..width {
        out.push_str(fill);
    }
    out.push_str(right);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Alignment, BorderStyle};

    #[test]
    fn test_default_borders() {
        let style = StyleSet::default();
        assert_eq!(top_border(&style, 10), "┏━━━━━━━━━━┓");
        assert_eq!(bottom_border(&style, 10), "┗━━━━━━━━━━┛");
    }

    #[test]
    fn test_bottom_border_uses_style_horizontal() {
        let style = StyleSet::from(BorderStyle::Double);
        assert_eq!(bottom_border(&style, 3), "╚═══╝");
    }

    #[test]
    fn test_blank_interior_row() {
        let style = StyleSet::default();
        assert_eq!(interior_row(&style, 10, None), "┃          ┃");
    }

    #[test]
    fn test_content_interior_row() {
        let style = StyleSet::from(BorderStyle::Ascii);
        let entry = ContentEntry::new(0, "hi".into(), Alignment::Right);
        assert_eq!(interior_row(&style, 5, Some(&entry)), "|   hi|");
    }
}
