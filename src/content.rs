//! Row-indexed content store.
//!
//! A [`ContentTable`] holds at most one [`ContentEntry`] per interior row.
//! Placement validates both the row and the text width up front, so every
//! stored entry can be rendered without further checks.

use std::collections::BTreeMap;
use std::io::Write;

use tracing::debug;

use crate::error::{FrameError, Result};
use crate::layout::{fits, text_width};
use crate::types::{Alignment, ContentEntry, FrameSpec};

/// Placed text, keyed by interior row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTable {
    spec: FrameSpec,
    entries: BTreeMap<usize, ContentEntry>,
}

impl ContentTable {
    /// Create an empty table for a frame of the given dimensions.
    pub fn new(spec: FrameSpec) -> Self {
        Self {
            spec,
            entries: BTreeMap::new(),
        }
    }

    /// Dimensions the table validates against.
    #[inline]
    pub fn spec(&self) -> FrameSpec {
        self.spec
    }

    /// Place `text` on `row`, replacing whatever the row held before.
    ///
    /// Fails with [`FrameError::RowOutOfRange`] when `row >= height`, with
    /// [`FrameError::ControlCharacter`] when the text holds a line break or
    /// other control character, and with [`FrameError::ContentTooWide`] when
    /// the text is wider than the interior. A failed placement leaves the
    /// table unchanged.
    pub fn place(
        &mut self,
        row: usize,
        text: impl Into<String>,
        alignment: Alignment,
    ) -> Result<()> {
        if !self.spec.contains_row(row) {
            return Err(FrameError::RowOutOfRange {
                row,
                height: self.spec.height(),
            });
        }

        let text = text.into();
        // Every stored entry must render as exactly one line.
        if let Some(ch) = text.chars().find(|c| c.is_control()) {
            return Err(FrameError::ControlCharacter { row, ch });
        }

        if !fits(&text, self.spec.width()) {
            return Err(FrameError::ContentTooWide {
                len: text_width(&text),
                width: self.spec.width(),
            });
        }

        let len = text_width(&text);
        let replaced = self
            .entries
            .insert(row, ContentEntry::new(row, text, alignment))
            .is_some();
        debug!(row, len, %alignment, replaced, "placed content");
        Ok(())
    }

    /// Remove the entry on `row`, returning it if there was one.
    pub fn remove(&mut self, row: usize) -> Option<ContentEntry> {
        let removed = self.entries.remove(&row);
        if removed.is_some() {
            debug!(row, "removed content");
        }
        removed
    }

    /// Remove every entry. The frame interior renders blank afterwards.
    pub fn clear(&mut self) {
        debug!(count = self.entries.len(), "cleared content");
        self.entries.clear();
    }

    /// Entry on `row`, if any.
    #[inline]
    pub fn get(&self, row: usize) -> Option<&ContentEntry> {
        self.entries.get(&row)
    }

    /// Entries in ascending row order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &ContentEntry)> + '_ {
        self.entries.iter().map(|(row, entry)| (*row, entry))
    }

    /// Number of rows holding content.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no row holds content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write one `text: <text> is in row: <row>` line per entry.
    pub fn write_summary<W: Write>(&self, sink: &mut W) -> Result<()> {
        for entry in self.entries.values() {
            writeln!(sink, "{entry}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ContentTable {
        ContentTable::new(FrameSpec::new(4, 10).unwrap())
    }

    #[test]
    fn test_place_and_get() {
        let mut table = table();
        table.place(1, "test", Alignment::Center).unwrap();

        let entry = table.get(1).unwrap();
        assert_eq!(entry.row(), 1);
        assert_eq!(entry.text(), "test");
        assert_eq!(entry.alignment(), Alignment::Center);
        assert_eq!(table.len(), 1);
        assert!(table.get(0).is_none());
    }

    #[test]
    fn test_row_out_of_range() {
        let mut table = table();
        for row in [4, 5, 100, usize::MAX] {
            let err = table.place(row, "x", Alignment::Left).unwrap_err();
            assert!(matches!(err, FrameError::RowOutOfRange { row: r, height: 4 } if r == row));
        }
        assert!(table.is_empty());
    }

    #[test]
    fn test_row_checked_against_height_not_width() {
        let mut table = ContentTable::new(FrameSpec::new(8, 3).unwrap());
        assert!(table.place(6, "abc", Alignment::Left).is_ok());

        let mut table = ContentTable::new(FrameSpec::new(2, 10).unwrap());
        assert!(matches!(
            table.place(5, "abc", Alignment::Left),
            Err(FrameError::RowOutOfRange { .. })
        ));
    }

    #[test]
    fn test_content_too_wide() {
        let mut table = table();
        let err = table.place(0, "01234567890", Alignment::Left).unwrap_err();
        assert!(matches!(err, FrameError::ContentTooWide { len: 11, width: 10 }));
        assert!(table.place(0, "0123456789", Alignment::Left).is_ok());
    }

    #[test]
    fn test_width_counts_chars() {
        let mut table = ContentTable::new(FrameSpec::new(1, 3).unwrap());
        assert!(table.place(0, "héé", Alignment::Left).is_ok());
        assert!(table.place(0, "héél", Alignment::Left).is_err());
    }

    #[test]
    fn test_control_characters_rejected() {
        let mut table = table();
        let cases = [
            ("ab\ncd", '\n'),
            ("ab\r", '\r'),
            ("a\tb", '\t'),
            ("\u{1b}[1m", '\u{1b}'),
        ];
        for (text, bad) in cases {
            let err = table.place(1, text, Alignment::Center).unwrap_err();
            assert!(matches!(err, FrameError::ControlCharacter { row: 1, ch } if ch == bad));
        }
        assert!(table.is_empty());
    }

    #[test]
    fn test_control_character_checked_before_width() {
        let mut table = table();
        let err = table.place(0, "line one\nline two", Alignment::Left).unwrap_err();
        assert!(matches!(err, FrameError::ControlCharacter { ch: '\n', .. }));
    }

    #[test]
    fn test_failed_place_keeps_previous_entry() {
        let mut table = table();
        table.place(2, "keep", Alignment::Right).unwrap();
        assert!(table.place(2, "far too long text", Alignment::Left).is_err());
        assert_eq!(table.get(2).unwrap().text(), "keep");
    }

    #[test]
    fn test_last_write_wins() {
        let mut table = table();
        table.place(2, "a", Alignment::Left).unwrap();
        table.place(2, "b", Alignment::Right).unwrap();

        assert_eq!(table.len(), 1);
        let entry = table.get(2).unwrap();
        assert_eq!(entry.text(), "b");
        assert_eq!(entry.alignment(), Alignment::Right);
    }

    #[test]
    fn test_entries_sorted_by_row() {
        let mut table = table();
        table.place(3, "c", Alignment::Left).unwrap();
        table.place(0, "a", Alignment::Left).unwrap();
        table.place(1, "b", Alignment::Left).unwrap();

        let rows: Vec<usize> = table.entries().map(|(row, _)| row).collect();
        assert_eq!(rows, vec![0, 1, 3]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut table = table();
        table.place(0, "a", Alignment::Left).unwrap();
        table.place(1, "b", Alignment::Left).unwrap();

        assert_eq!(table.remove(0).unwrap().text(), "a");
        assert!(table.remove(0).is_none());
        assert_eq!(table.len(), 1);

        table.clear();
        assert!(table.is_empty());
    }

    #[test]
    fn test_write_summary() {
        let mut table = table();
        table.place(2, "test1", Alignment::Left).unwrap();
        table.place(1, "test", Alignment::Left).unwrap();

        let mut out = Vec::new();
        table.write_summary(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "text: test is in row: 1\ntext: test1 is in row: 2\n"
        );
    }
}
