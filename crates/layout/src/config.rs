use serde::{Deserialize, Serialize};

/// Line terminator written after every rendered line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` everywhere else.
    #[default]
    Platform,
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Platform if cfg!(windows) => "\r\n",
            LineEnding::Platform | LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LayoutConfig {
    /// How [`Render::write_with`](crate::Render::write_with) terminates lines.
    ///
    /// Defaults to the platform terminator.
    pub line_ending: LineEnding,
}
