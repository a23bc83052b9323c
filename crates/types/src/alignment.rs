use crate::geometry::width_of;
use serde::{Deserialize, Serialize};
use std::iter;

/// Horizontal placement of a line of text inside a wider slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum Alignment {
    /// Text hugs the start of the slot; fill goes after it.
    #[default]
    Start,
    /// Text hugs the end of the slot; fill goes before it.
    End,
    /// Fill is split on both sides. An odd remainder lands on the end side.
    Center,
}

impl Alignment {
    /// Pads `line` with `fill` until it is `width` columns wide.
    ///
    /// Lines that are already at least `width` wide come back unchanged;
    /// nothing is ever truncated.
    pub fn pad(self, line: &str, width: usize, fill: char) -> String {
        let extra = width.saturating_sub(width_of(line));
        let (before, after) = match self {
            Alignment::Start => (0, extra),
            Alignment::End => (extra, 0),
            Alignment::Center => (extra / 2, extra - extra / 2),
        };

        let mut padded = String::with_capacity(line.len() + extra * fill.len_utf8());
        padded.extend(iter::repeat_n(fill, before));
        padded.push_str(line);
        padded.extend(iter::repeat_n(fill, after));
        padded
    }
}
