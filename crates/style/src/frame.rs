//! Glyph sets for each kind of frame.
//!
//! Every set deserializes with per-field defaults, so a configuration only
//! has to name the glyphs it wants to change.
use crate::glyph::Glyph;
use serde::{Deserialize, Serialize};

/// Glyphs used inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CellStyle {
    /// Fills the gap between aligned text and the padding, and the blank
    /// lines added when a cell is stretched vertically.
    pub fill: Glyph,
    /// Draws the horizontal and vertical padding.
    pub padding: Glyph,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fill: Glyph::SPACE,
            padding: Glyph::SPACE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RowStyle {
    /// Separates neighbouring cells.
    pub joiner: Glyph,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self {
            joiner: Glyph::PIPE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DividerStyle {
    pub divider: Glyph,
    pub joiner: Glyph,
}

impl Default for DividerStyle {
    fn default() -> Self {
        Self {
            divider: Glyph::DASH,
            joiner: Glyph::PLUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BlockStyle {
    pub border: Glyph,
    pub title_pad: Glyph,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            border: Glyph::STAR,
            title_pad: Glyph::TILDE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TableStyle {
    /// Fills the top and bottom borders.
    pub horizontal: Glyph,
    /// Closes every row line on the left and right.
    pub vertical: Glyph,
    /// Sits where a border crosses a column boundary, and separates cells.
    pub joiner: Glyph,
    /// Fills the borders between header, body and footer.
    pub section: Glyph,
    pub title_pad: Glyph,
}

impl TableStyle {
    pub fn border(&self) -> DividerStyle {
        DividerStyle {
            divider: self.horizontal,
            joiner: self.joiner,
        }
    }

    pub fn section_border(&self) -> DividerStyle {
        DividerStyle {
            divider: self.section,
            joiner: self.joiner,
        }
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            horizontal: Glyph::DASH,
            vertical: Glyph::PIPE,
            joiner: Glyph::PLUS,
            section: Glyph::EQUALS,
            title_pad: Glyph::TILDE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_table_style_keeps_defaults() {
        let style: TableStyle = serde_json::from_str(r#"{ "section": "-", "title-pad": " " }"#).unwrap();
        assert_eq!(style.section, Glyph::DASH);
        assert_eq!(style.title_pad, Glyph::SPACE);
        assert_eq!(style.horizontal, Glyph::DASH);
        assert_eq!(style.vertical, Glyph::PIPE);
        assert_eq!(style.joiner, Glyph::PLUS);
    }

    #[test]
    fn test_border_styles_share_the_joiner() {
        let style = TableStyle::default();
        assert_eq!(style.border().divider, Glyph::DASH);
        assert_eq!(style.section_border().divider, Glyph::EQUALS);
        assert_eq!(style.border().joiner, style.section_border().joiner);
    }

    #[test]
    fn test_block_defaults() {
        let style = BlockStyle::default();
        assert_eq!(style.border.as_char(), '*');
        assert_eq!(style.title_pad.as_char(), '~');
    }
}
