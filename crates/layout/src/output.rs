//! Output side of every finalized frame.
//!
//! Rendering is pure; the only side effect is writing the finished lines to a
//! sink, and any failure there is returned to the caller.

use crate::config::LayoutConfig;
use crate::{Block, Cell, Divider, LayoutError, Row, Table};
use std::fmt;
use std::io::Write;

/// A finalized, immutable frame of text lines.
pub trait Render {
    /// The rendered lines, top to bottom. Never contains line breaks or tabs.
    fn lines(&self) -> &[String];

    /// Writes every line followed by the platform line terminator.
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), LayoutError> {
        self.write_with(sink, &LayoutConfig::default())
    }

    /// Writes every line followed by the terminator chosen in `config`.
    fn write_with<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        config: &LayoutConfig,
    ) -> Result<(), LayoutError> {
        let terminator = config.line_ending.as_str();
        let mut text = self.lines().join(terminator);
        text.push_str(terminator);
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

macro_rules! display_lines {
    ($($frame:ty),* $(,)?) => {
        $(
            impl fmt::Display for $frame {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.lines().join("\n"))
                }
            }
        )*
    };
}

display_lines!(Cell, Divider, Row, Block, Table);
