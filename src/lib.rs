//! Fixed-width text frames: cells, rows, dividers, blocks and tables laid out
//! into lines of equal width.
//!
//! The layout engine lives in `textframe-layout`; this crate adds a JSON
//! document model and the `textframe` command line tool on top of it.

pub mod document;
pub mod error;

pub use document::{Document, Frame};
pub use error::FrameError;

pub use textframe_layout::{
    Alignment, Block, BlockBuilder, BlockStyle, Cell, CellBuilder, CellStyle, Divider,
    DividerBuilder, DividerStyle, Glyph, LayoutConfig, LayoutError, LineEnding, Render, Row,
    RowBuilder, RowStyle, Size, Table, TableBuilder, TableStyle,
};
