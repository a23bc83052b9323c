use crate::{LayoutError, Render};
use itertools::Itertools;
use textframe_style::{DividerStyle, Glyph};
use textframe_types::{Size, separated_width};

/// Configuration for a [`Divider`], a single separator line spanning a set
/// of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DividerBuilder {
    column_widths: Vec<usize>,
    total_width: Option<usize>,
    style: DividerStyle,
}

impl DividerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column_widths(mut self, widths: impl Into<Vec<usize>>) -> Self {
        self.column_widths = widths.into();
        self
    }

    pub fn with_divider(mut self, divider: char) -> Result<Self, LayoutError> {
        self.style.divider = Glyph::new(divider)?;
        Ok(self)
    }

    pub fn with_joiner(mut self, joiner: char) -> Result<Self, LayoutError> {
        self.style.joiner = Glyph::new(joiner)?;
        Ok(self)
    }

    pub fn with_style(mut self, style: DividerStyle) -> Self {
        self.style = style;
        self
    }

    /// Declares the expected width of the line. It must match the columns
    /// plus their joiners.
    pub fn with_total_width(mut self, width: usize) -> Result<Self, LayoutError> {
        if width == 0 {
            return Err(LayoutError::InvalidArgument(
                "divider width must be positive".to_string(),
            ));
        }
        self.total_width = Some(width);
        Ok(self)
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    pub fn total_width(&self) -> usize {
        self.total_width
            .unwrap_or_else(|| separated_width(&self.column_widths))
    }

    pub fn finish(&self) -> Result<Divider, LayoutError> {
        if self.column_widths.is_empty() {
            return Err(LayoutError::Empty("divider"));
        }
        let spanned = separated_width(&self.column_widths);
        if let Some(expected) = self.total_width.filter(|&w| w != spanned) {
            return Err(LayoutError::ColumnWidthMismatch {
                expected,
                found: spanned,
            });
        }

        let DividerStyle { divider, joiner } = self.style;
        let line = self
            .column_widths
            .iter()
            .map(|&width| divider.repeat(width))
            .join(&joiner.to_string());

        Ok(Divider {
            lines: vec![line],
            column_widths: self.column_widths.clone(),
            width: spanned,
        })
    }
}

/// A finalized divider. Always exactly one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divider {
    lines: Vec<String>,
    column_widths: Vec<usize>,
    width: usize,
}

impl Divider {
    pub fn line(&self) -> &str {
        &self.lines[0]
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, 1)
    }
}

impl Render for Divider {
    fn lines(&self) -> &[String] {
        &self.lines
    }
}
