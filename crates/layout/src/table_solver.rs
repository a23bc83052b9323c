use crate::LayoutError;
use log::{debug, trace};
use textframe_types::separated_width;

/// Trait to abstract the row properties needed for width solving.
/// This allows the solver to be decoupled from the specific `RowBuilder` struct.
pub trait ColumnInfo {
    fn column_widths(&self) -> Vec<usize>;
    fn total_width(&self) -> usize;
}

impl<T: ColumnInfo + ?Sized> ColumnInfo for &T {
    fn column_widths(&self) -> Vec<usize> {
        (**self).column_widths()
    }

    fn total_width(&self) -> usize {
        (**self).total_width()
    }
}

/// Reconciled geometry shared by every row of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub column_widths: Vec<usize>,
    pub total_width: usize,
}

/// A dedicated solver for calculating table column widths.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableSolver {
    min_width: usize,
}

impl TableSolver {
    /// `min_width` is the narrowest the table may be, typically driven by
    /// its title and caption.
    pub fn new(min_width: usize) -> Self {
        Self { min_width }
    }

    /// Merges per-row column widths position-wise and widens the result to the
    /// widest requirement.
    ///
    /// 1. Every row must declare the same number of columns.
    /// 2. Each column takes the largest width any row declares for it.
    /// 3. The target width is the largest of `min_width` and every row's
    ///    total width; slack is handed out by [`distribute_slack`].
    pub fn resolve_widths<I, R>(&self, rows: I) -> Result<ColumnLayout, LayoutError>
    where
        I: IntoIterator<Item = R>,
        R: ColumnInfo,
    {
        let mut widths: Option<Vec<usize>> = None;
        let mut target = self.min_width;

        for row in rows {
            let row_widths = row.column_widths();
            target = target.max(row.total_width());

            match widths.as_mut() {
                None => widths = Some(row_widths),
                Some(merged) => {
                    if merged.len() != row_widths.len() {
                        return Err(LayoutError::ColumnCountMismatch {
                            expected: merged.len(),
                            found: row_widths.len(),
                        });
                    }
                    for (merged, width) in merged.iter_mut().zip(row_widths) {
                        *merged = (*merged).max(width);
                    }
                }
            }
        }

        let mut column_widths = widths.ok_or(LayoutError::Empty("table"))?;
        if column_widths.is_empty() {
            return Err(LayoutError::Empty("row"));
        }

        distribute_slack(&mut column_widths, target);
        let total_width = separated_width(&column_widths);
        debug!(
            "resolved {} columns to {:?} (target {}, total {})",
            column_widths.len(),
            column_widths,
            target,
            total_width
        );

        Ok(ColumnLayout {
            column_widths,
            total_width,
        })
    }
}

/// Widens columns one character at a time until they span `target`.
///
/// Each step grows the narrowest column, the lowest index winning ties, so
/// growth is deterministic and favours narrow columns. Columns that already
/// span `target` or more are left alone.
pub fn distribute_slack(widths: &mut [usize], target: usize) {
    let mut slack = target.saturating_sub(separated_width(widths));
    while slack > 0 {
        // `min_by_key` keeps the first of equal minimums.
        let Some((index, _)) = widths.iter().enumerate().min_by_key(|&(_, width)| *width) else {
            return;
        };
        widths[index] += 1;
        slack -= 1;
        trace!("widened column {index} to {}; {slack} left", widths[index]);
    }
}
