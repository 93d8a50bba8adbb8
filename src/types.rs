//! Core types for spark-frame.
//!
//! Plain values that describe a frame: its interior dimensions, the alignment
//! of a content row, the entries stored per row, and the named border presets.

use std::fmt;
use std::str::FromStr;

use crate::error::{FrameError, Result};

// =============================================================================
// Frame Dimensions
// =============================================================================

/// Interior dimensions of a frame.
///
/// `height` counts interior rows and `width` counts interior columns; the
/// border adds one row/column on every side. Both are positive and fixed
/// after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameSpec {
    height: usize,
    width: usize,
}

impl FrameSpec {
    /// Create a frame spec, rejecting zero dimensions.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(FrameError::InvalidDimensions { height, width });
        }
        Ok(Self { height, width })
    }

    /// Number of interior rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of interior columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Total rendered lines, borders included.
    #[inline]
    pub const fn outer_height(&self) -> usize {
        self.height + 2
    }

    /// Total rendered columns, borders included.
    #[inline]
    pub const fn outer_width(&self) -> usize {
        self.width + 2
    }

    /// Check if `row` is an interior row.
    #[inline]
    pub const fn contains_row(&self, row: usize) -> bool {
        row < self.height
    }
}

// =============================================================================
// Alignment
// =============================================================================

/// Horizontal placement of text inside an interior row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Alignment {
    /// All alignments, in discriminant order.
    pub const fn all() -> &'static [Alignment] {
        &[Self::Left, Self::Center, Self::Right]
    }

    /// Lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = FrameError;

    /// Parse case-insensitively. An empty string is the default (left).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(FrameError::InvalidAlignment(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Alignment {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Center),
            2 => Ok(Self::Right),
            other => Err(FrameError::InvalidAlignment(other.to_string())),
        }
    }
}

// =============================================================================
// Content Entries
// =============================================================================

/// Text placed on one interior row.
///
/// Entries are only created by [`ContentTable::place`](crate::ContentTable::place),
/// so an entry always fits the frame it was placed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    row: usize,
    text: String,
    alignment: Alignment,
}

impl ContentEntry {
    pub(crate) fn new(row: usize, text: String, alignment: Alignment) -> Self {
        Self { row, text, alignment }
    }

    /// Interior row this entry occupies.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// The placed text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How the text is padded to the interior width.
    #[inline]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
}

impl fmt::Display for ContentEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "text: {} is in row: {}", self.text, self.row)
    }
}

// =============================================================================
// Border Styles
// =============================================================================

/// Named border presets.
///
/// All 10 standard terminal border styles. [`BorderStyle::Bold`] is the
/// default glyph set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BorderStyle {
    /// ─ │ ┌ ┐ └ ┘
    Single = 1,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double = 2,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded = 3,
    /// ━ ┃ ┏ ┓ ┗ ┛
    #[default]
    Bold = 4,
    /// ┄ ┆ ┌ ┐ └ ┘
    Dashed = 5,
    /// · · · · · ·
    Dotted = 6,
    /// - | + + + +
    Ascii = 7,
    /// █ █ █ █ █ █
    Block = 8,
    /// ═ │ ╒ ╕ ╘ ╛ (double horizontal, single vertical)
    DoubleHorz = 9,
    /// ─ ║ ╓ ╖ ╙ ╜ (single horizontal, double vertical)
    DoubleVert = 10,
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_left, bottom_right)
    pub const fn chars(
        &self,
    ) -> (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::Single => ("─", "│", "┌", "┐", "└", "┘"),
            Self::Double => ("═", "║", "╔", "╗", "╚", "╝"),
            Self::Rounded => ("─", "│", "╭", "╮", "╰", "╯"),
            Self::Bold => ("━", "┃", "┏", "┓", "┗", "┛"),
            Self::Dashed => ("┄", "┆", "┌", "┐", "└", "┘"),
            Self::Dotted => ("·", "·", "·", "·", "·", "·"),
            Self::Ascii => ("-", "|", "+", "+", "+", "+"),
            Self::Block => ("█", "█", "█", "█", "█", "█"),
            Self::DoubleHorz => ("═", "│", "╒", "╕", "╘", "╛"),
            Self::DoubleVert => ("─", "║", "╓", "╖", "╙", "╜"),
        }
    }

    /// Every preset.
    pub const fn all() -> &'static [BorderStyle] {
        &[
            Self::Single,
            Self::Double,
            Self::Rounded,
            Self::Bold,
            Self::Dashed,
            Self::Dotted,
            Self::Ascii,
            Self::Block,
            Self::DoubleHorz,
            Self::DoubleVert,
        ]
    }

    /// Parse from string (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            "rounded" => Some(Self::Rounded),
            "bold" => Some(Self::Bold),
            "dashed" => Some(Self::Dashed),
            "dotted" => Some(Self::Dotted),
            "ascii" => Some(Self::Ascii),
            "block" => Some(Self::Block),
            "double-horz" | "doublehorz" => Some(Self::DoubleHorz),
            "double-vert" | "doublevert" => Some(Self::DoubleVert),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
