use crate::divider::DividerBuilder;
use crate::row::RowBuilder;
use crate::table_solver::{ColumnLayout, TableSolver};
use crate::text::{self, max_width};
use crate::{LayoutError, Render};
use log::debug;
use textframe_style::{Glyph, TableStyle};
use textframe_types::{Alignment, Size};

/// Configuration for a [`Table`]: header, body and footer row groups that
/// share one set of negotiated column widths, framed by borders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBuilder {
    title: Vec<String>,
    header: Vec<RowBuilder>,
    body: Vec<RowBuilder>,
    footer: Vec<RowBuilder>,
    caption: Vec<String>,
    style: TableStyle,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_body(rows: impl IntoIterator<Item = RowBuilder>) -> Self {
        Self::new().add_body(rows)
    }

    pub fn add_header(mut self, rows: impl IntoIterator<Item = RowBuilder>) -> Self {
        self.header.extend(rows);
        self
    }

    pub fn with_header(mut self, rows: impl IntoIterator<Item = RowBuilder>) -> Self {
        self.header.clear();
        self.add_header(rows)
    }

    pub fn add_body(mut self, rows: impl IntoIterator<Item = RowBuilder>) -> Self {
        self.body.extend(rows);
        self
    }

    pub fn with_body(mut self, rows: impl IntoIterator<Item = RowBuilder>) -> Self {
        self.body.clear();
        self.add_body(rows)
    }

    pub fn add_footer(mut self, rows: impl IntoIterator<Item = RowBuilder>) -> Self {
        self.footer.extend(rows);
        self
    }

    pub fn with_footer(mut self, rows: impl IntoIterator<Item = RowBuilder>) -> Self {
        self.footer.clear();
        self.add_footer(rows)
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

    /// Sets the border fill, the row closing glyph, the joiner where borders
    /// meet column boundaries, and the header/footer separator fill.
    pub fn with_dividers(
        mut self,
        horizontal: char,
        vertical: char,
        joiner: char,
        section: char,
    ) -> Result<Self, LayoutError> {
        self.style = TableStyle {
            horizontal: Glyph::new(horizontal)?,
            vertical: Glyph::new(vertical)?,
            joiner: Glyph::new(joiner)?,
            section: Glyph::new(section)?,
            title_pad: self.style.title_pad,
        };
        Ok(self)
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Applies the padding to every row added so far.
    pub fn with_padding(mut self, horizontal: usize, vertical: usize) -> Self {
        self.map_rows(|row| row.with_padding(horizontal, vertical));
        self
    }

    /// Applies `align` to every row added so far.
    pub fn with_alignment(mut self, align: Alignment) -> Self {
        self.map_rows(|row| row.with_alignment(align));
        self
    }

    fn map_rows(&mut self, f: impl Fn(RowBuilder) -> RowBuilder) {
        for group in [&mut self.header, &mut self.body, &mut self.footer] {
            *group = std::mem::take(group).into_iter().map(&f).collect();
        }
    }

    pub fn title_lines(&self) -> &[String] {
        &self.title
    }

    pub fn caption_lines(&self) -> &[String] {
        &self.caption
    }

    pub fn header_rows(&self) -> &[RowBuilder] {
        &self.header
    }

    pub fn body_rows(&self) -> &[RowBuilder] {
        &self.body
    }

    pub fn footer_rows(&self) -> &[RowBuilder] {
        &self.footer
    }

    fn rows(&self) -> impl Iterator<Item = &RowBuilder> {
        self.header.iter().chain(&self.body).chain(&self.footer)
    }

    /// Negotiates the column widths every row will be rendered at.
    pub fn resolve_columns(&self) -> Result<ColumnLayout, LayoutError> {
        self.rows().try_for_each(RowBuilder::validate)?;
        let min_width = max_width(&self.title).max(max_width(&self.caption));
        TableSolver::new(min_width).resolve_widths(self.rows())
    }

    pub fn finish(&self) -> Result<Table, LayoutError> {
        let ColumnLayout {
            column_widths,
            total_width,
        } = self.resolve_columns()?;
        let style = self.style;

        let border = DividerBuilder::new()
            .with_style(style.border())
            .with_column_widths(column_widths.as_slice())
            .finish()?;
        let section = DividerBuilder::new()
            .with_style(style.section_border())
            .with_column_widths(column_widths.as_slice())
            .finish()?;
        let border_line = style.joiner.wrap(border.line());
        let section_line = style.joiner.wrap(section.line());

        let title: Vec<String> = self
            .title
            .iter()
            .map(|line| {
                Alignment::Center.pad(&format!(" {line} "), total_width + 2, style.title_pad.as_char())
            })
            .collect();
        let header = self.render_group(&self.header, &column_widths)?;
        let body = self.render_group(&self.body, &column_widths)?;
        let footer = self.render_group(&self.footer, &column_widths)?;

        let mut lines = Vec::with_capacity(
            title.len() + header.len() + body.len() + footer.len() + self.caption.len() + 4,
        );
        lines.extend(title.iter().cloned());
        lines.push(border_line.clone());
        if !header.is_empty() {
            lines.extend(header.iter().cloned());
            lines.push(section_line.clone());
        }
        lines.extend(body.iter().cloned());
        if !footer.is_empty() {
            lines.push(section_line);
            lines.extend(footer.iter().cloned());
        }
        lines.push(border_line);
        lines.extend(self.caption.iter().cloned());

        let size = Size::new(
            lines.iter().map(|line| text::width_of(line)).max().unwrap_or(0),
            lines.len(),
        );
        debug!(
            "table rendered at {}x{}: {} header, {} body, {} footer rows",
            size.width,
            size.height,
            self.header.len(),
            self.body.len(),
            self.footer.len()
        );

        Ok(Table {
            lines,
            title,
            header,
            body,
            footer,
            caption: self.caption.clone(),
            column_widths,
            size,
        })
    }

    fn render_group(&self, rows: &[RowBuilder], widths: &[usize]) -> Result<Vec<String>, LayoutError> {
        let vertical = self.style.vertical;
        let mut lines = Vec::new();
        for row in rows {
            let rendered = row.compose(row.resolve_height()?, widths)?;
            lines.extend(rendered.lines().iter().map(|line| vertical.wrap(line)));
        }
        Ok(lines)
    }
}

/// A finalized table. Every row line, border and section separator has the
/// same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    lines: Vec<String>,
    title: Vec<String>,
    header: Vec<String>,
    body: Vec<String>,
    footer: Vec<String>,
    caption: Vec<String>,
    column_widths: Vec<usize>,
    size: Size,
}

impl Table {
    /// Title lines, already centered.
    pub fn title(&self) -> &[String] {
        &self.title
    }

    /// Header row lines, wrapped in the vertical glyph.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn footer(&self) -> &[String] {
        &self.footer
    }

    pub fn caption(&self) -> &[String] {
        &self.caption
    }

    /// Negotiated widths shared by every row.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Width of the widest line and the number of lines.
    pub fn size(&self) -> Size {
        self.size
    }
}

impl Render for Table {
    fn lines(&self) -> &[String] {
        &self.lines
    }
}
