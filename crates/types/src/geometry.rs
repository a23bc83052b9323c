use serde::{Deserialize, Serialize};

/// Dimensions of a rendered frame, measured in character cells.
///
/// Every character counts as exactly one column, so `width` is a character
/// count and `height` is a line count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Grows each dimension to at least the matching dimension of `other`.
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// Number of columns `line` occupies.
#[inline]
pub fn width_of(line: &str) -> usize {
    line.chars().count()
}

/// Width of the widest line, or 0 when there are no lines.
pub fn max_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| width_of(line.as_ref()))
        .max()
        .unwrap_or(0)
}

/// Width of `widths` laid side by side with a one character separator between
/// neighbours.
pub fn separated_width(widths: &[usize]) -> usize {
    match widths.len() {
        0 => 0,
        n => widths.iter().sum::<usize>() + n - 1,
    }
}
