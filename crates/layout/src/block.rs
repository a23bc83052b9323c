use crate::cell::CellBuilder;
use crate::text::{self, max_width};
use crate::{LayoutError, Render};
use log::debug;
use textframe_style::{BlockStyle, Glyph};
use textframe_types::{Alignment, Size};

/// Configuration for a [`Block`]: optional centered title lines, a bordered
/// single-cell body and optional caption lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockBuilder {
    title: Vec<String>,
    body: CellBuilder,
    caption: Vec<String>,
    style: BlockStyle,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A block whose body holds the sanitized `lines`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new().add_text(lines)
    }

    /// Appends the sanitized `lines` to the body.
    pub fn add_text<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.body = self.body.add_lines(lines);
        self
    }

    /// Sets the border glyph and replaces the body with `lines`.
    pub fn with_text<I, S>(mut self, border: char, lines: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.style.border = Glyph::new(border)?;
        self.body = self.body.with_lines(lines);
        Ok(self)
    }

    pub fn add_title<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.title.extend(text::sanitize_all(lines));
        self
    }

    /// Sets the glyph the title is centered with and replaces the title.
    pub fn with_title<I, S>(mut self, pad: char, lines: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.style.title_pad = Glyph::new(pad)?;
        self.title.clear();
        Ok(self.add_title(lines))
    }

    pub fn add_caption<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.caption.extend(text::sanitize_all(lines));
        self
    }

    pub fn with_caption<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.caption.clear();
        self.add_caption(lines)
    }

    pub fn with_border(mut self, border: char) -> Result<Self, LayoutError> {
        self.style.border = Glyph::new(border)?;
        Ok(self)
    }

    pub fn with_style(mut self, style: BlockStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_alignment(mut self, align: Alignment) -> Self {
        self.body = self.body.with_alignment(align);
        self
    }

    pub fn with_padding(mut self, horizontal: usize, vertical: usize) -> Self {
        self.body = self.body.with_padding(horizontal, vertical);
        self
    }

    pub fn with_padding_spacer(mut self, spacer: char) -> Result<Self, LayoutError> {
        self.body = self.body.with_padding_spacer(spacer)?;
        Ok(self)
    }

    /// Fixes the size of the body inside the border. The body still widens
    /// to a longer title or caption.
    pub fn with_total_size(mut self, height: usize, width: usize) -> Result<Self, LayoutError> {
        self.body = self.body.with_total_size(height, width)?;
        Ok(self)
    }

    pub fn title_lines(&self) -> &[String] {
        &self.title
    }

    pub fn caption_lines(&self) -> &[String] {
        &self.caption
    }

    /// Width between the borders: the widest of title, body and caption.
    pub fn inner_width(&self) -> usize {
        max_width(&self.title)
            .max(self.body.total_size().width)
            .max(max_width(&self.caption))
    }

    pub fn finish(&self) -> Result<Block, LayoutError> {
        let width = self.inner_width();
        let body_height = self.body.total_size().height;
        if self.title.is_empty() && self.caption.is_empty() && body_height == 0 {
            return Err(LayoutError::Empty("block"));
        }

        let BlockStyle { border, title_pad } = self.style;
        let title: Vec<String> = self
            .title
            .iter()
            .map(|line| Alignment::Center.pad(&format!(" {line} "), width + 2, title_pad.as_char()))
            .collect();

        let body: Vec<String> = if body_height == 0 {
            Vec::new()
        } else {
            self.body
                .render(Size::new(width, body_height))?
                .lines()
                .iter()
                .map(|line| border.wrap(line))
                .collect()
        };

        let border_line = border.repeat(width + 2);
        let mut lines = Vec::with_capacity(title.len() + body.len() + self.caption.len() + 2);
        lines.extend(title.iter().cloned());
        if !body.is_empty() {
            lines.push(border_line.clone());
            lines.extend(body.iter().cloned());
            lines.push(border_line);
        }
        lines.extend(self.caption.iter().cloned());

        let size = Size::new(
            lines.iter().map(|line| text::width_of(line)).max().unwrap_or(0),
            lines.len(),
        );
        debug!("block rendered at {}x{}", size.width, size.height);

        Ok(Block {
            lines,
            title,
            body,
            caption: self.caption.clone(),
            size,
        })
    }
}

/// A finalized block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    title: Vec<String>,
    body: Vec<String>,
    caption: Vec<String>,
    size: Size,
}

impl Block {
    /// Title lines, already centered.
    pub fn title(&self) -> &[String] {
        &self.title
    }

    /// Body lines wrapped in the border glyph, without the border lines.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn caption(&self) -> &[String] {
        &self.caption
    }

    /// Width of the widest line and the number of lines.
    pub fn size(&self) -> Size {
        self.size
    }
}

impl Render for Block {
    fn lines(&self) -> &[String] {
        &self.lines
    }
}
