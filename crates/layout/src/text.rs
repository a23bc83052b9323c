//! Normalization of raw caller text into atomic lines.
//!
//! A sanitized line never contains a line break or a tab and never ends in
//! breaking whitespace. Leading whitespace and non-breaking spaces are
//! preserved.

pub use textframe_types::{max_width, width_of};

/// Replacement for every tab character.
pub const TAB_SPACES: &str = "  ";

/// Splits `raw` on any line break (`\r\n`, `\n`, `\r`, vertical tab, form
/// feed, NEL, U+2028, U+2029), expands tabs and strips trailing whitespace.
///
/// Empty input yields a single empty line. Trailing empty segments are
/// dropped, so `"a\n"` yields `["a"]` and `"\n"` yields no lines at all.
pub fn sanitize(raw: &str) -> Vec<String> {
    let mut segments = split_line_breaks(raw);
    if segments.len() > 1 {
        while segments.last().is_some_and(|segment| segment.is_empty()) {
            segments.pop();
        }
    }

    segments
        .into_iter()
        .map(|segment| {
            segment
                .replace('\t', TAB_SPACES)
                .trim_end_matches(is_breaking_space)
                .to_string()
        })
        .collect()
}

/// Sanitizes every entry and concatenates the resulting lines in order.
pub fn sanitize_all<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .flat_map(|text| sanitize(text.as_ref()))
        .collect()
}

/// Whitespace stripped from line ends. Non-breaking spaces (U+00A0, U+2007,
/// U+202F) are content and stay; the information separators U+001C..U+001F
/// count as whitespace.
fn is_breaking_space(c: char) -> bool {
    match c {
        '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        '\u{1c}'..='\u{1f}' => true,
        _ => c.is_whitespace(),
    }
}

fn split_line_breaks(raw: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut chars = raw.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        let break_len = match c {
            '\r' => match chars.peek() {
                Some((_, '\n')) => {
                    chars.next();
                    2
                }
                _ => 1,
            },
            '\n' | '\u{0b}' | '\u{0c}' | '\u{85}' | '\u{2028}' | '\u{2029}' => c.len_utf8(),
            _ => continue,
        };
        segments.push(&raw[start..index]);
        start = index + break_len;
    }
    segments.push(&raw[start..]);
    segments
}
