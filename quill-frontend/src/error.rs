use quill_buffer::error::BufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error("Clipboard operation failed: {0}")]
    Clipboard(#[from] arboard::Error),
    #[error("Clipboard is not available")]
    ClipboardUnavailable,
    #[error("File operation failed: {0}")]
    FileOperationFailed(#[from] std::io::Error),
}
