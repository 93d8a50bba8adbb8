//! The bordered frame.
//!
//! A [`Frame`] owns its dimensions, its glyph set and its content table.
//! Content can be placed, removed and cleared at any time; rendering reads
//! the current state and never changes it, so editing and rendering can be
//! interleaved freely.
//!
//! # Example
//!
//! ```ignore
//! use spark_frame::{Alignment, Frame};
//!
//! let mut frame = Frame::new(4, 10)?;
//! frame.place(1, "test", Alignment::Center)?;
//! frame.render(&mut std::io::stdout())?;
//! ```

use std::io::Write;

use tracing::debug;

use crate::content::ContentTable;
use crate::error::Result;
use crate::renderer;
use crate::style::StyleSet;
use crate::types::{Alignment, ContentEntry, FrameSpec};

/// A bordered rectangle with row-placed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    spec: FrameSpec,
    style: StyleSet,
    content: ContentTable,
}

impl Frame {
    /// Create a frame with the default glyph set.
    ///
    /// `height` and `width` are interior dimensions and must be positive.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Self::with_style(height, width, StyleSet::default())
    }

    /// Create a frame with a specific glyph set.
    pub fn with_style(height: usize, width: usize, style: StyleSet) -> Result<Self> {
        Ok(Self::from_spec(FrameSpec::new(height, width)?, style))
    }

    /// Create a frame from already validated dimensions.
    pub fn from_spec(spec: FrameSpec, style: StyleSet) -> Self {
        Self {
            spec,
            style,
            content: ContentTable::new(spec),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn spec(&self) -> FrameSpec {
        self.spec
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.spec.height()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.spec.width()
    }

    #[inline]
    pub fn style(&self) -> &StyleSet {
        &self.style
    }

    #[inline]
    pub fn content(&self) -> &ContentTable {
        &self.content
    }

    // -------------------------------------------------------------------------
    // Style
    // -------------------------------------------------------------------------

    /// Replace the glyph set.
    pub fn set_style(&mut self, style: StyleSet) {
        debug!(default = style.is_default(), "style changed");
        self.style = style;
    }

    /// Switch back to the default glyph set.
    ///
    /// Style values handed out earlier are copies and stay as they were.
    pub fn reset_style(&mut self) {
        self.set_style(StyleSet::default());
    }

    // -------------------------------------------------------------------------
    // Content
    // -------------------------------------------------------------------------

    /// Place `text` on interior `row`. See [`ContentTable::place`].
    pub fn place(
        &mut self,
        row: usize,
        text: impl Into<String>,
        alignment: Alignment,
    ) -> Result<()> {
        self.content.place(row, text, alignment)
    }

    /// Remove the content on `row`.
    pub fn remove(&mut self, row: usize) -> Option<ContentEntry> {
        self.content.remove(row)
    }

    /// Remove all content.
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Placed entries in ascending row order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &ContentEntry)> + '_ {
        self.content.entries()
    }

    /// Write a `text: .. is in row: ..` line for each entry.
    pub fn write_summary<W: Write>(&self, sink: &mut W) -> Result<()> {
        self.content.write_summary(sink)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Render into `sink`. See [`renderer::render`].
    pub fn render<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        renderer::render(self, sink)
    }

    /// Render into a `String`.
    pub fn render_to_string(&self) -> Result<String> {
        renderer::render_to_string(self)
    }
}

// =============================================================================
// Tests
// =============================================================================
