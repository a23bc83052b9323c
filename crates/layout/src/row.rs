use crate::cell::{Cell, CellBuilder};
use crate::table_solver::{self, ColumnInfo};
use crate::{LayoutError, Render};
use itertools::Itertools;
use log::debug;
use textframe_style::{Glyph, RowStyle};
use textframe_types::{Alignment, Size, separated_width};

/// Configuration for a [`Row`]: cells laid side by side at one shared height.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowBuilder {
    cells: Vec<CellBuilder>,
    column_widths: Option<Vec<usize>>,
    total_height: Option<usize>,
    total_width: Option<usize>,
    style: RowStyle,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A row with one single-text cell per entry of `texts`.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_cells(CellBuilder::many(texts))
    }

    pub fn from_cells(cells: impl IntoIterator<Item = CellBuilder>) -> Self {
        Self::new().add_cells(cells)
    }

    pub fn add_cells(mut self, cells: impl IntoIterator<Item = CellBuilder>) -> Self {
        self.cells.extend(cells);
        self
    }

    /// Replaces all cells.
    pub fn with_cells(mut self, cells: impl IntoIterator<Item = CellBuilder>) -> Self {
        self.cells.clear();
        self.add_cells(cells)
    }

    /// Applies `align` to every cell added so far.
    pub fn with_alignment(mut self, align: Alignment) -> Self {
        self.cells = self
            .cells
            .into_iter()
            .map(|cell| cell.with_alignment(align))
            .collect();
        self
    }

    /// Applies the padding to every cell added so far.
    pub fn with_padding(mut self, horizontal: usize, vertical: usize) -> Self {
        self.cells = self
            .cells
            .into_iter()
            .map(|cell| cell.with_padding(horizontal, vertical))
            .collect();
        self
    }

    pub fn with_joiner(mut self, joiner: char) -> Result<Self, LayoutError> {
        self.style.joiner = Glyph::new(joiner)?;
        Ok(self)
    }

    pub fn with_style(mut self, style: RowStyle) -> Self {
        self.style = style;
        self
    }

    /// Fixes each column's width. The count must match the cells, and each
    /// width must hold its cell; both are checked by [`finish`](Self::finish).
    pub fn with_column_widths(mut self, widths: impl Into<Vec<usize>>) -> Result<Self, LayoutError> {
        let widths = widths.into();
        if widths.is_empty() {
            return Err(LayoutError::InvalidArgument(
                "column widths must not be empty".to_string(),
            ));
        }
        self.column_widths = Some(widths);
        Ok(self)
    }

    pub fn with_total_height(mut self, height: usize) -> Result<Self, LayoutError> {
        if height == 0 {
            return Err(LayoutError::InvalidArgument(
                "row height must be positive".to_string(),
            ));
        }
        self.total_height = Some(height);
        Ok(self)
    }

    /// Fixes the width of the row's lines. Without explicit column widths the
    /// columns are widened to fill it.
    pub fn with_total_width(mut self, width: usize) -> Result<Self, LayoutError> {
        if width == 0 {
            return Err(LayoutError::InvalidArgument(
                "row width must be positive".to_string(),
            ));
        }
        self.total_width = Some(width);
        Ok(self)
    }

    pub fn cells(&self) -> &[CellBuilder] {
        &self.cells
    }

    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    /// Height of the tallest cell.
    pub fn natural_height(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.total_size().height)
            .max()
            .unwrap_or(0)
    }

    pub fn total_height(&self) -> usize {
        self.total_height.unwrap_or_else(|| self.natural_height())
    }

    pub fn finish(&self) -> Result<Row, LayoutError> {
        let height = self.resolve_height()?;
        let widths = self.resolve_column_widths()?;
        self.compose(height, &widths)
    }

    /// Checks the row's own geometry: its explicit height, width and column
    /// widths must agree with each other and hold the cells.
    ///
    /// Tables call this before merging rows, so a conflict a lone row would
    /// reject is rejected inside a table too.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.resolve_height()?;
        self.resolve_column_widths()?;
        self.cells.iter().try_for_each(CellBuilder::validate)
    }

    pub(crate) fn resolve_height(&self) -> Result<usize, LayoutError> {
        if self.cells.is_empty() {
            return Err(LayoutError::Empty("row"));
        }
        let natural = self.natural_height();
        match self.total_height {
            Some(height) if height < natural => Err(LayoutError::ContentOverflow {
                what: "row height",
                required: natural,
                supplied: height,
            }),
            Some(height) => Ok(height),
            None => Ok(natural),
        }
    }

    fn resolve_column_widths(&self) -> Result<Vec<usize>, LayoutError> {
        let mut widths = ColumnInfo::column_widths(self);
        let spanned = separated_width(&widths);

        match (self.total_width, &self.column_widths) {
            (Some(expected), Some(_)) if expected != spanned => {
                Err(LayoutError::ColumnWidthMismatch {
                    expected,
                    found: spanned,
                })
            }
            (Some(target), None) if target < spanned => Err(LayoutError::ContentOverflow {
                what: "row width",
                required: spanned,
                supplied: target,
            }),
            (Some(target), None) => {
                table_solver::distribute_slack(&mut widths, target);
                Ok(widths)
            }
            _ => Ok(widths),
        }
    }

    /// Stretches every cell to `height` and its column's width, then joins
    /// the cells line by line.
    pub(crate) fn compose(&self, height: usize, widths: &[usize]) -> Result<Row, LayoutError> {
        if widths.len() != self.cells.len() {
            return Err(LayoutError::ColumnCountMismatch {
                expected: widths.len(),
                found: self.cells.len(),
            });
        }

        let cells = self
            .cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| cell.render(Size::new(width, height)))
            .collect::<Result<Vec<Cell>, _>>()?;

        let joiner = self.style.joiner.to_string();
        let lines = (0..height)
            .map(|index| cells.iter().map(|cell| &cell.lines()[index]).join(&joiner))
            .collect();

        let size = Size::new(separated_width(widths), height);
        debug!(
            "row of {} cells composed at {}x{} with widths {:?}",
            cells.len(),
            size.width,
            size.height,
            widths
        );

        Ok(Row {
            lines,
            column_widths: widths.to_vec(),
            size,
        })
    }
}

impl ColumnInfo for RowBuilder {
    /// The explicit widths when set, otherwise each cell's own width.
    fn column_widths(&self) -> Vec<usize> {
        match &self.column_widths {
            Some(widths) => widths.clone(),
            None => self
                .cells
                .iter()
                .map(|cell| cell.total_size().width)
                .collect(),
        }
    }

    fn total_width(&self) -> usize {
        self.total_width
            .unwrap_or_else(|| separated_width(&ColumnInfo::column_widths(self)))
    }
}

/// A finalized row: `size.height` lines, one per shared cell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    lines: Vec<String>,
    column_widths: Vec<usize>,
    size: Size,
}

impl Row {
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Render for Row {
    fn lines(&self) -> &[String] {
        &self.lines
    }
}
