use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Invalid glyph {0:?}: line breaks, tabs and other control characters cannot be drawn inline.")]
    ControlCharacter(char),
}
