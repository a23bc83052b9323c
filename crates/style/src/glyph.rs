//! Single characters used to draw borders, joiners and fill.
use crate::error::StyleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter;

/// A character that is safe to repeat inside a rendered line.
///
/// Construction rejects control characters, so a glyph can never smuggle a
/// line break or tab into otherwise sanitized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Glyph(char);

impl Glyph {
    pub const SPACE: Glyph = Glyph(' ');
    pub const DASH: Glyph = Glyph('-');
    pub const PIPE: Glyph = Glyph('|');
    pub const PLUS: Glyph = Glyph('+');
    pub const EQUALS: Glyph = Glyph('=');
    pub const TILDE: Glyph = Glyph('~');
    pub const STAR: Glyph = Glyph('*');

    pub fn new(c: char) -> Result<Self, StyleError> {
        if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') {
            return Err(StyleError::ControlCharacter(c));
        }
        Ok(Glyph(c))
    }

    #[inline]
    pub fn as_char(self) -> char {
        self.0
    }

    /// A run of `count` copies of this glyph.
    pub fn repeat(self, count: usize) -> String {
        iter::repeat_n(self.0, count).collect()
    }

    /// `inner` with one copy of this glyph on either side.
    pub fn wrap(self, inner: &str) -> String {
        let mut wrapped = String::with_capacity(inner.len() + 2 * self.0.len_utf8());
        wrapped.push(self.0);
        wrapped.push_str(inner);
        wrapped.push(self.0);
        wrapped
    }
}

impl TryFrom<char> for Glyph {
    type Error = StyleError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Glyph::new(c)
    }
}

impl From<Glyph> for char {
    fn from(glyph: Glyph) -> Self {
        glyph.0
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
