use thiserror::Error;
use textframe_style::StyleError;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Unable to fit a {what} of {required} into a supplied {supplied}.")]
    ContentOverflow {
        what: &'static str,
        required: usize,
        supplied: usize,
    },
    #[error("Column count mismatch: expected {expected} columns, got {found}.")]
    ColumnCountMismatch { expected: usize, found: usize },
    #[error("Column width mismatch: columns span {found} characters but the width is fixed at {expected}.")]
    ColumnWidthMismatch { expected: usize, found: usize },
    #[error("Unable to render an empty {0}.")]
    Empty(&'static str),
    #[error("Failed to write rendered lines: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StyleError> for LayoutError {
    fn from(e: StyleError) -> Self {
        LayoutError::InvalidArgument(e.to_string())
    }
}

pub mod block;
pub mod cell;
pub mod config;
pub mod divider;
pub mod output;
pub mod row;
pub mod table;
pub mod table_solver;
pub mod text;

pub use self::block::{Block, BlockBuilder};
pub use self::cell::{Cell, CellBuilder};
pub use self::config::{LayoutConfig, LineEnding};
pub use self::divider::{Divider, DividerBuilder};
pub use self::output::Render;
pub use self::row::{Row, RowBuilder};
pub use self::table::{Table, TableBuilder};
pub use self::table_solver::{ColumnInfo, ColumnLayout, TableSolver};

// Re-export the foundation types so callers need only this crate.
pub use textframe_style::{BlockStyle, CellStyle, DividerStyle, Glyph, RowStyle, TableStyle};
pub use textframe_types::{Alignment, Size};

#[cfg(test)]
mod block_test;
#[cfg(test)]
mod test_utils;
