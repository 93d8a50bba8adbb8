//! Border glyph sets.
//!
//! A [`StyleSet`] maps the six border roles to the glyphs that draw them.
//! Style sets are immutable values: the process-wide [`DEFAULT_STYLE`] is a
//! constant, and every custom set is built fresh by [`StyleBuilder`] or
//! [`StyleSet::custom`]. Nothing mutates a style in place.
//!
//! # Example
//!
//! ```ignore
//! use spark_frame::{GlyphRole, StyleSet};
//!
//! let ascii = StyleSet::builder()
//!     .horizontal("-")
//!     .vertical("|")
//!     .top_left("+")
//!     .top_right("+")
//!     .bottom_left("+")
//!     .bottom_right("+")
//!     .build()?;
//! assert_eq!(ascii.glyph(GlyphRole::Vertical), "|");
//! ```

use std::borrow::Cow;
use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::error::{FrameError, Result};
use crate::types::BorderStyle;

// =============================================================================
// Glyph Roles
// =============================================================================

/// The six positions a border glyph can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphRole {
    Horizontal,
    Vertical,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl GlyphRole {
    /// All roles.
    pub const fn all() -> &'static [GlyphRole] {
        &[
            Self::Horizontal,
            Self::Vertical,
            Self::TopLeft,
            Self::TopRight,
            Self::BottomLeft,
            Self::BottomRight,
        ]
    }

    /// Kebab-case role name, as used by [`StyleSet::custom`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Parse a role name. Accepts `top-left` and `top_left` spellings.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            "top-left" => Some(Self::TopLeft),
            "top-right" => Some(Self::TopRight),
            "bottom-left" => Some(Self::BottomLeft),
            "bottom-right" => Some(Self::BottomRight),
            _ => None,
        }
    }
}

impl fmt::Display for GlyphRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// StyleSet
// =============================================================================

/// The canonical glyph set: ━ ┃ ┏ ┓ ┗ ┛
pub const DEFAULT_STYLE: StyleSet = StyleSet::from_static(BorderStyle::Bold);

/// Immutable set of border glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleSet {
    horizontal: Cow<'static, str>,
    vertical: Cow<'static, str>,
    top_left: Cow<'static, str>,
    top_right: Cow<'static, str>,
    bottom_left: Cow<'static, str>,
    bottom_right: Cow<'static, str>,
}

impl StyleSet {
    const fn from_static(style: BorderStyle) -> Self {
        let (h, v, tl, tr, bl, br) = style.chars();
        Self {
            horizontal: Cow::Borrowed(h),
            vertical: Cow::Borrowed(v),
            top_left: Cow::Borrowed(tl),
            top_right: Cow::Borrowed(tr),
            bottom_left: Cow::Borrowed(bl),
            bottom_right: Cow::Borrowed(br),
        }
    }

    /// Start building a custom glyph set.
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Build a glyph set from `(role name, glyph)` pairs.
    ///
    /// All six roles are required. Unknown role names, missing roles and
    /// glyphs that are not exactly one column wide are rejected with
    /// [`FrameError::InvalidStyle`]. A repeated role keeps its last glyph.
    pub fn custom<I, K, V>(glyphs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut builder = StyleBuilder::default();
        for (name, glyph) in glyphs {
            let name = name.as_ref();
            let role = GlyphRole::from_name(name)
                .ok_or_else(|| FrameError::InvalidStyle(format!("unknown glyph role `{name}`")))?;
            builder = builder.glyph(role, glyph);
        }
        builder.build()
    }

    /// Glyph for a role.
    pub fn glyph(&self, role: GlyphRole) -> &str {
        match role {
            GlyphRole::Horizontal => self.horizontal(),
            GlyphRole::Vertical => self.vertical(),
            GlyphRole::TopLeft => self.top_left(),
            GlyphRole::TopRight => self.top_right(),
            GlyphRole::BottomLeft => self.bottom_left(),
            GlyphRole::BottomRight => self.bottom_right(),
        }
    }

    #[inline]
    pub fn horizontal(&self) -> &str {
        &self.horizontal
    }

    #[inline]
    pub fn vertical(&self) -> &str {
        &self.vertical
    }

    #[inline]
    pub fn top_left(&self) -> &str {
        &self.top_left
    }

    #[inline]
    pub fn top_right(&self) -> &str {
        &self.top_right
    }

    #[inline]
    pub fn bottom_left(&self) -> &str {
        &self.bottom_left
    }

    #[inline]
    pub fn bottom_right(&self) -> &str {
        &self.bottom_right
    }

    /// Check if this set equals [`DEFAULT_STYLE`].
    pub fn is_default(&self) -> bool {
        *self == DEFAULT_STYLE
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        DEFAULT_STYLE
    }
}

impl From<BorderStyle> for StyleSet {
    fn from(style: BorderStyle) -> Self {
        Self::from_static(style)
    }
}

// =============================================================================
// StyleBuilder
// =============================================================================

/// Builder for a custom [`StyleSet`].
///
/// Every role must be set before [`build`](StyleBuilder::build) succeeds.
#[derive(Debug, Clone, Default)]
pub struct StyleBuilder {
    horizontal: Option<String>,
    vertical: Option<String>,
    top_left: Option<String>,
    top_right: Option<String>,
    bottom_left: Option<String>,
    bottom_right: Option<String>,
}

impl StyleBuilder {
    /// Set the glyph for any role.
    pub fn glyph(mut self, role: GlyphRole, glyph: impl Into<String>) -> Self {
        let slot = match role {
            GlyphRole::Horizontal => &mut self.horizontal,
            GlyphRole::Vertical => &mut self.vertical,
            GlyphRole::TopLeft => &mut self.top_left,
            GlyphRole::TopRight => &mut self.top_right,
            GlyphRole::BottomLeft => &mut self.bottom_left,
            GlyphRole::BottomRight => &mut self.bottom_right,
        };
        *slot = Some(glyph.into());
        self
    }

    pub fn horizontal(self, glyph: impl Into<String>) -> Self {
        self.glyph(GlyphRole::Horizontal, glyph)
    }

    pub fn vertical(self, glyph: impl Into<String>) -> Self {
        self.glyph(GlyphRole::Vertical, glyph)
    }

    pub fn top_left(self, glyph: impl Into<String>) -> Self {
        self.glyph(GlyphRole::TopLeft, glyph)
    }

    pub fn top_right(self, glyph: impl Into<String>) -> Self {
        self.glyph(GlyphRole::TopRight, glyph)
    }

    pub fn bottom_left(self, glyph: impl Into<String>) -> Self {
        self.glyph(GlyphRole::BottomLeft, glyph)
    }

    pub fn bottom_right(self, glyph: impl Into<String>) -> Self {
        self.glyph(GlyphRole::BottomRight, glyph)
    }

    /// Validate and produce the glyph set.
    pub fn build(self) -> Result<StyleSet> {
        Ok(StyleSet {
            horizontal: checked(GlyphRole::Horizontal, self.horizontal)?,
            vertical: checked(GlyphRole::Vertical, self.vertical)?,
            top_left: checked(GlyphRole::TopLeft, self.top_left)?,
            top_right: checked(GlyphRole::TopRight, self.top_right)?,
            bottom_left: checked(GlyphRole::BottomLeft, self.bottom_left)?,
            bottom_right: checked(GlyphRole::BottomRight, self.bottom_right)?,
        })
    }
}

/// A glyph must be present, free of control characters and one column wide.
fn checked(role: GlyphRole, glyph: Option<String>) -> Result<Cow<'static, str>> {
    let glyph =
        glyph.ok_or_else(|| FrameError::InvalidStyle(format!("missing glyph for `{role}`")))?;

    if glyph.chars().any(char::is_control) {
        return Err(FrameError::InvalidStyle(format!(
            "glyph for `{role}` contains a control character"
        )));
    }

    let width = glyph.width();
    if width != 1 {
        return Err(FrameError::InvalidStyle(format!(
            "glyph {glyph:?} for `{role}` is {width} columns wide, expected 1"
        )));
    }

    Ok(Cow::Owned(glyph))
}

// =============================================================================
// Tests
// =============================================================================
