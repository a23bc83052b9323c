use crate::text::{self, max_width};
use crate::{LayoutError, Render};
use log::debug;
use textframe_style::{CellStyle, Glyph};
use textframe_types::{Alignment, Size};

/// Configuration for a [`Cell`]: the smallest padded, aligned block of text.
///
/// Setters consume and return the builder so configuration chains; the
/// frozen [`Cell`] has no setters at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellBuilder {
    lines: Vec<String>,
    align: Alignment,
    style: CellStyle,
    horizontal_padding: usize,
    vertical_padding: usize,
    total_size: Option<Size>,
}

impl CellBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cell holding the sanitized `text`.
    pub fn from_text(text: &str) -> Self {
        Self::new().add_lines([text])
    }

    /// A cell holding every entry of `lines`, sanitized and in order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new().add_lines(lines)
    }

    /// One single-text cell per entry of `texts`.
    pub fn many<I, S>(texts: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| Self::from_text(text.as_ref()))
            .collect()
    }

    /// Appends the sanitized `lines` after any existing content.
    pub fn add_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lines.extend(text::sanitize_all(lines));
        self
    }

    /// Replaces all content with the sanitized `lines`.
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lines.clear();
        self.add_lines(lines)
    }

    pub fn with_alignment(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Character between the aligned text and the padding.
    pub fn with_fill(mut self, fill: char) -> Result<Self, LayoutError> {
        self.style.fill = Glyph::new(fill)?;
        Ok(self)
    }

    /// Character used for the padding columns and lines.
    pub fn with_padding_spacer(mut self, spacer: char) -> Result<Self, LayoutError> {
        self.style.padding = Glyph::new(spacer)?;
        Ok(self)
    }

    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    /// Empty columns on each side and empty lines above and below the text.
    pub fn with_padding(mut self, horizontal: usize, vertical: usize) -> Self {
        self.horizontal_padding = horizontal;
        self.vertical_padding = vertical;
        self
    }

    /// Fixes the outer size of the cell. Both dimensions must be positive;
    /// whether the content fits is checked by [`finish`](Self::finish).
    pub fn with_total_size(mut self, height: usize, width: usize) -> Result<Self, LayoutError> {
        if height == 0 || width == 0 {
            return Err(LayoutError::InvalidArgument(format!(
                "cell size must be positive, got height={height} width={width}"
            )));
        }
        self.total_size = Some(Size::new(width, height));
        Ok(self)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn alignment(&self) -> Alignment {
        self.align
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Smallest size that holds the content and its padding.
    pub fn natural_size(&self) -> Size {
        Size::new(
            max_width(&self.lines) + 2 * self.horizontal_padding,
            self.lines.len() + 2 * self.vertical_padding,
        )
    }

    /// The explicit size when one was set, otherwise the natural size.
    pub fn total_size(&self) -> Size {
        self.total_size.unwrap_or_else(|| self.natural_size())
    }

    /// Checks that the explicit size, if any, holds the content and padding.
    pub fn validate(&self) -> Result<(), LayoutError> {
        match self.total_size {
            Some(size) => ensure_fits(self.natural_size(), size),
            None => Ok(()),
        }
    }

    pub fn finish(&self) -> Result<Cell, LayoutError> {
        self.render(self.total_size())
    }

    /// Renders the cell at exactly `size`, as rows and blocks do when they
    /// stretch a cell to a shared height or column width.
    ///
    /// An explicit size set on the cell must still hold its content, even when
    /// the container renders it larger.
    pub(crate) fn render(&self, size: Size) -> Result<Cell, LayoutError> {
        let natural = self.natural_size();
        self.validate()?;
        ensure_fits(natural, size)?;
        if size.height == 0 {
            return Err(LayoutError::Empty("cell"));
        }

        let CellStyle { fill, padding } = self.style;
        let pad_line = padding.repeat(size.width);
        let side = padding.repeat(self.horizontal_padding);
        let filler_width = size.width - 2 * self.horizontal_padding;

        let mut lines = Vec::with_capacity(size.height);
        lines.extend(std::iter::repeat_n(pad_line.clone(), self.vertical_padding));
        for line in &self.lines {
            let middle = self.align.pad(line, filler_width, fill.as_char());
            lines.push(format!("{side}{middle}{side}"));
        }

        // Stretched cells get fill lines between the text and the bottom padding.
        let stretch = size.height - natural.height;
        let blank = format!("{side}{}{side}", fill.repeat(filler_width));
        lines.extend(std::iter::repeat_n(blank, stretch));
        lines.extend(std::iter::repeat_n(pad_line, self.vertical_padding));

        debug!(
            "cell rendered at {}x{} (natural {}x{})",
            size.width, size.height, natural.width, natural.height
        );

        Ok(Cell {
            lines,
            size,
            align: self.align,
        })
    }
}

fn ensure_fits(natural: Size, size: Size) -> Result<(), LayoutError> {
    if size.width < natural.width {
        return Err(LayoutError::ContentOverflow {
            what: "cell width",
            required: natural.width,
            supplied: size.width,
        });
    }
    if size.height < natural.height {
        return Err(LayoutError::ContentOverflow {
            what: "cell height",
            required: natural.height,
            supplied: size.height,
        });
    }
    Ok(())
}

/// A finalized cell: exactly `size.height` lines of `size.width` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    lines: Vec<String>,
    size: Size,
    align: Alignment,
}

impl Cell {
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn alignment(&self) -> Alignment {
        self.align
    }
}

impl Render for Cell {
    fn lines(&self) -> &[String] {
        &self.lines
    }
}
