pub mod error;
pub mod frame;
pub mod glyph;

pub use error::StyleError;
pub use frame::{BlockStyle, CellStyle, DividerStyle, RowStyle, TableStyle};
pub use glyph::Glyph;
