use textframe_layout::LayoutError;
use thiserror::Error;

/// A comprehensive error type for loading, laying out and writing documents.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
