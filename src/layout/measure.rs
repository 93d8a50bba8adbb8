//! Text measurement.
//!
//! Frames treat every `char` as one terminal column. Wide and zero-width
//! characters are not special-cased, so content widths are a plain char count.

/// Measure the width of a string in frame columns.
#[inline]
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Check if `text` fits into `width` columns.
#[inline]
pub fn fits(text: &str, width: usize) -> bool {
    text_width(text) <= width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_ascii() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("test"), 4);
    }

    #[test]
    fn test_text_width_counts_chars_not_bytes() {
        assert_eq!(text_width("━━━"), 3);
        assert_eq!(text_width("héllo"), 5);
    }

    #[test]
    fn test_fits() {
        assert!(fits("test", 4));
        assert!(fits("", 1));
        assert!(!fits("test1", 4));
    }
}
